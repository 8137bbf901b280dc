use crate::{CoreError, Order, Plane, PlaneRow, Priority, Result as CoreErrorResult};

use serde::Serialize;

/// The edit form of an existing order.
///
/// Unlike the creation form, rows can be removed, down to one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderEdit {
    pub order_id: String,
    pub name: String,
    pub priority: Priority,
    planes: Vec<PlaneRow>,
}

impl OrderEdit {
    pub fn from_order(order: &Order) -> Self {
        Self {
            order_id: order.id.clone(),
            name: order.name.clone(),
            priority: order.priority,
            planes: order.planes.iter().map(PlaneRow::from).collect(),
        }
    }

    pub fn planes(&self) -> &[PlaneRow] {
        &self.planes
    }

    pub fn plane_mut(&mut self, index: usize) -> Option<&mut PlaneRow> {
        self.planes.get_mut(index)
    }

    pub fn add_plane(&mut self) -> usize {
        self.planes.push(PlaneRow::default());
        self.planes.len() - 1
    }

    /// Replace every row at once.
    pub fn set_planes(&mut self, rows: Vec<PlaneRow>) {
        self.planes = rows;
    }

    #[track_caller]
    pub fn remove_plane(&mut self, index: usize) -> CoreErrorResult<PlaneRow> {
        if index >= self.planes.len() {
            return Err(CoreError::validation(format!(
                "No plane row {} (order has {})",
                index + 1,
                self.planes.len()
            )));
        }

        if self.planes.len() == 1 {
            return Err(CoreError::validation(
                "An order must keep at least one plane",
            ));
        }

        Ok(self.planes.remove(index))
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<OrderUpdate> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("Customer name is required"));
        }

        if self.planes.is_empty() {
            return Err(CoreError::validation("At least one plane is required"));
        }

        if self.planes.iter().any(|plane| plane.problem().is_some()) {
            return Err(CoreError::validation(
                "All plane fields must be filled and quantity must be positive",
            ));
        }

        Ok(OrderUpdate {
            name: self.name.trim().to_string(),
            planes: self.planes.iter().map(PlaneRow::to_plane).collect(),
            priority: self.priority,
        })
    }
}

/// Body of `PUT /api/orders/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderUpdate {
    pub name: String,
    pub planes: Vec<Plane>,
    pub priority: Priority,
}
