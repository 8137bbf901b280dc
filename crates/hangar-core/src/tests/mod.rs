mod analytics;
mod board;
mod form;
mod models;

use crate::{Order, Plane, Priority, Status};

use chrono::{TimeZone, Utc};

/// A minimal order in the given stage.
pub(crate) fn order(id: &str, status: Status) -> Order {
    Order {
        id: id.to_string(),
        name: format!("Customer {id}"),
        planes: vec![Plane {
            id: None,
            name: "Spitfire".to_string(),
            quantity: 1,
            size: "1:48".to_string(),
        }],
        status,
        priority: Priority::Normal,
        index: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        completed_at: None,
        done_at: None,
        pics: Vec::new(),
    }
}
