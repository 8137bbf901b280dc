use std::path::PathBuf;

use clap::{ArgGroup, Subcommand};

#[derive(Subcommand)]
pub enum PictureCommands {
    /// List an order's pictures with their URLs
    List {
        /// Order ID
        order_id: String,
    },

    /// Delete one picture
    Delete {
        /// Order ID
        order_id: String,

        /// Stored file name
        filename: String,
    },

    /// Add pictures from files, a remote URL, or pasted stdin content
    #[command(group(ArgGroup::new("source").required(true).args(["files", "url", "paste"])))]
    Upload {
        /// Order ID
        order_id: String,

        /// Local image file (repeatable)
        #[arg(long = "file")]
        files: Vec<PathBuf>,

        /// Image URL to download and upload
        #[arg(long)]
        url: Option<String>,

        /// Read pasted content from stdin: image data or an image URL
        #[arg(long)]
        paste: bool,
    },
}
