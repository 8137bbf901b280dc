use crate::{Plane, Priority, Status};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,

    /// Customer name
    pub name: String,

    #[serde(default)]
    pub planes: Vec<Plane>,

    // Workflow
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,

    // Audit
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub pics: Vec<String>,
}

impl Order {
    /// Total number of kits across all line items.
    pub fn total_quantity(&self) -> u32 {
        self.planes.iter().map(|plane| plane.quantity).sum()
    }
}
