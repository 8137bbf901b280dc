use clap::Subcommand;

#[derive(Subcommand)]
pub enum BoardCommands {
    /// Print the board
    Show {
        /// Print the batch layout (id, status, index) as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move a card, like a drag and drop
    Move {
        /// Source as STAGE:INDEX, e.g. pending:0
        #[arg(long)]
        from: String,

        /// Destination as STAGE:INDEX; omit to cancel the drag
        #[arg(long)]
        to: Option<String>,
    },

    /// Reprint the board every poll interval until interrupted
    Watch {
        /// Poll interval in seconds (default: feed.poll_interval_secs)
        #[arg(long)]
        interval: Option<u64>,

        /// Stop after this many polls
        #[arg(long)]
        ticks: Option<usize>,
    },
}
