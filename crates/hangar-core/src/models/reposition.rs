use crate::Status;

use serde::{Deserialize, Serialize};

/// One entry of the batch reposition payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reposition {
    pub id: String,
    pub status: Status,
    pub index: usize,
}
