use clap::Subcommand;

#[derive(Subcommand)]
pub enum OrderCommands {
    /// List orders on the board
    List,

    /// List archived orders
    Done {
        /// Print as text instead of JSON
        #[arg(long)]
        text: bool,
    },

    /// Create a new order (enters the board as pending)
    Create {
        /// Customer name
        #[arg(long)]
        name: String,

        /// Priority (default: normal)
        #[arg(long, value_parser = ["low", "normal", "high", "urgent"], default_value = "normal")]
        priority: String,

        /// Plane line item as NAME:QUANTITY:SIZE (repeatable)
        #[arg(long = "plane")]
        planes: Vec<String>,
    },

    /// Edit customer name, priority or planes of an order
    Update {
        /// Order ID
        id: String,

        /// New customer name
        #[arg(long)]
        name: Option<String>,

        /// New priority
        #[arg(long, value_parser = ["low", "normal", "high", "urgent"])]
        priority: Option<String>,

        /// Replace all planes with these NAME:QUANTITY:SIZE rows (repeatable)
        #[arg(long = "plane")]
        planes: Vec<String>,

        /// Append a NAME:QUANTITY:SIZE row (repeatable)
        #[arg(long = "add-plane")]
        add_planes: Vec<String>,

        /// Remove the plane row with this 1-based number (repeatable)
        #[arg(long = "remove-plane")]
        remove_planes: Vec<usize>,
    },

    /// Permanently delete an order
    Delete {
        /// Order ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Archive an order
    MarkDone {
        /// Order ID
        id: String,
    },

    /// Restore an archived order to the board
    MarkUndone {
        /// Order ID
        id: String,
    },
}
