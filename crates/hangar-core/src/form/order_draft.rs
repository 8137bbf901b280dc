use crate::{CoreError, Plane, PlaneRow, Priority, Result as CoreErrorResult, Status};

use serde::Serialize;

/// The order creation form.
///
/// Starts with one blank plane row. Rows can be added but not removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub name: String,
    pub priority: Priority,
    planes: Vec<PlaneRow>,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            priority: Priority::default(),
            planes: vec![PlaneRow::default()],
        }
    }
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a draft from already typed rows. An empty row list keeps the
    /// initial blank row.
    pub fn from_rows(name: &str, priority: Priority, rows: Vec<PlaneRow>) -> Self {
        let mut draft = Self {
            name: name.to_string(),
            priority,
            ..Self::default()
        };
        if !rows.is_empty() {
            draft.planes = rows;
        }
        draft
    }

    pub fn planes(&self) -> &[PlaneRow] {
        &self.planes
    }

    pub fn plane_mut(&mut self, index: usize) -> Option<&mut PlaneRow> {
        self.planes.get_mut(index)
    }

    /// Append a blank row and return its index.
    pub fn add_plane(&mut self) -> usize {
        self.planes.push(PlaneRow::default());
        self.planes.len() - 1
    }

    /// Check the form and build the creation payload.
    ///
    /// New orders always enter the board as pending.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<NewOrder> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("Name is required"));
        }

        if self.planes.is_empty() {
            return Err(CoreError::validation("At least one plane is required"));
        }

        for (row, plane) in self.planes.iter().enumerate() {
            if let Some(problem) = plane.problem() {
                return Err(CoreError::validation(format!("Plane {}: {problem}", row + 1)));
            }
        }

        Ok(NewOrder {
            name: self.name.trim().to_string(),
            planes: self.planes.iter().map(PlaneRow::to_plane).collect(),
            status: Status::Pending,
            priority: self.priority,
        })
    }
}

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewOrder {
    pub name: String,
    pub planes: Vec<Plane>,
    pub status: Status,
    pub priority: Priority,
}
