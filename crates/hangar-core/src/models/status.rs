use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Production stage of an order.
///
/// The first seven variants are board stages, in board order. `Done` is the
/// archival state reached through mark-done and never appears as a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Order received, nothing started
    #[default]
    Pending,
    Moulding,
    /// Putty and spray
    Putty,
    Artist,
    /// Detailing
    Detail,
    Quality,
    Shipped,
    /// Archived
    Done,
}

impl Status {
    /// Board columns, left to right.
    pub const BOARD: [Status; 7] = [
        Self::Pending,
        Self::Moulding,
        Self::Putty,
        Self::Artist,
        Self::Detail,
        Self::Quality,
        Self::Shipped,
    ];

    /// Convert to wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Moulding => "moulding",
            Self::Putty => "putty",
            Self::Artist => "artist",
            Self::Detail => "detail",
            Self::Quality => "quality",
            Self::Shipped => "shipped",
            Self::Done => "done",
        }
    }

    /// Column position on the board, `None` for the archival state.
    pub fn board_position(&self) -> Option<usize> {
        Self::BOARD.iter().position(|stage| stage == self)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Moulding => "Moulding",
            Self::Putty => "Putty and Spray",
            Self::Artist => "Artist",
            Self::Detail => "Detailing",
            Self::Quality => "Quality",
            Self::Shipped => "Shipped",
            Self::Done => "Done",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Pending => "🕙",
            Self::Moulding => "🛠️",
            Self::Putty => "🎨",
            Self::Artist => "🧑‍🎨",
            Self::Detail => "📦",
            Self::Quality => "🔍",
            Self::Shipped => "🚚",
            Self::Done => "✅",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Pending => "red",
            Self::Moulding => "yellow",
            Self::Putty => "green",
            Self::Artist => "blue",
            Self::Detail => "purple",
            Self::Quality => "pink",
            Self::Shipped => "orange",
            Self::Done => "gray",
        }
    }
}

impl FromStr for Status {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "moulding" => Ok(Self::Moulding),
            "putty" => Ok(Self::Putty),
            "artist" => Ok(Self::Artist),
            "detail" => Ok(Self::Detail),
            "quality" => Ok(Self::Quality),
            "shipped" => Ok(Self::Shipped),
            "done" => Ok(Self::Done),
            _ => Err(CoreError::InvalidStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
