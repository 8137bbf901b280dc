pub mod order;
pub mod plane;
pub mod priority;
pub mod reposition;
pub mod status;
