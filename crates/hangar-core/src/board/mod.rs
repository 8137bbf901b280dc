pub mod board;
pub mod drag;
