use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "hangar")]
#[command(about = "Order board for model-plane production")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (overrides server.url from config.toml)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Directory holding config.toml (default: $HANGAR_CONFIG_DIR or ./.hangar)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
