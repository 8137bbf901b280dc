use crate::{CoreError, Result as CoreErrorResult, Status};

use std::str::FromStr;

/// A position on the board: a stage column and a zero-based slot in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragLocation {
    pub stage: Status,
    pub index: usize,
}

impl DragLocation {
    pub fn new(stage: Status, index: usize) -> Self {
        Self { stage, index }
    }
}

/// Parses `STAGE:INDEX`, e.g. `moulding:0`.
impl FromStr for DragLocation {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let (stage, index) = s.split_once(':').ok_or_else(|| {
            CoreError::validation(format!("Expected STAGE:INDEX, got '{s}'"))
        })?;

        let stage = Status::from_str(stage.trim())?;
        let index = index.trim().parse::<usize>().map_err(|_| {
            CoreError::validation(format!("Index must be a non-negative integer, got '{index}'"))
        })?;

        Ok(Self { stage, index })
    }
}

/// The result of a drag gesture. A missing destination means the card was
/// released outside every column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drag {
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

impl Drag {
    pub fn new(source: DragLocation, destination: Option<DragLocation>) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn cancelled(source: DragLocation) -> Self {
        Self::new(source, None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Released outside any column; nothing changed
    Cancelled,
    /// Reordered within one column
    Reordered { order_id: String, stage: Status },
    /// Moved to another column
    Moved {
        order_id: String,
        from: Status,
        to: Status,
    },
}

impl DragOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}
