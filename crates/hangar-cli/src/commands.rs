use crate::{
    board_commands::BoardCommands, order_commands::OrderCommands,
    picture_commands::PictureCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Order operations
    Order {
        #[command(subcommand)]
        action: OrderCommands,
    },

    /// Kanban board: show, move cards, watch
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },

    /// Picture gallery of an order
    Pics {
        #[command(subcommand)]
        action: PictureCommands,
    },

    /// Order statistics
    Analytics {
        /// Print the raw report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
}
