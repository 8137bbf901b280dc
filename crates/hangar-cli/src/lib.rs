//! hangar-cli library
//!
//! HTTP client, board session and picture sources behind the `hangar` binary.

pub mod board_session;
pub mod cli;
pub mod client;
pub mod feed;
pub mod logger;
pub mod notice;
pub mod pictures;
pub mod render;
pub mod runner;

pub(crate) mod board_commands;
pub(crate) mod commands;
pub(crate) mod order_commands;
pub(crate) mod picture_commands;

#[cfg(test)]
mod tests;

pub use board_session::{BoardSession, UploadReport};
pub use client::{CliClientResult, Client, ClientError};
pub use feed::OrderFeed;
pub use notice::{Notice, NoticeVariant};
pub use pictures::{ClipboardItem, PasteOutcome, PictureFile};
