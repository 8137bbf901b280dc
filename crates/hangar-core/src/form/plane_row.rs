use crate::{CoreError, Plane, Result as CoreErrorResult};

use std::str::FromStr;

/// An editable line-item row, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneRow {
    pub id: Option<String>,
    pub name: String,
    pub quantity: u32,
    pub size: String,
}

impl Default for PlaneRow {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            quantity: 1,
            size: String::new(),
        }
    }
}

impl PlaneRow {
    pub fn new(name: &str, quantity: u32, size: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            quantity,
            size: size.to_string(),
        }
    }

    /// Problem with this row, if any.
    pub fn problem(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("Plane name is required")
        } else if self.quantity < 1 {
            Some("Quantity must be at least 1")
        } else if self.size.trim().is_empty() {
            Some("Size is required")
        } else {
            None
        }
    }

    /// Wire form of the row. The plane identifier is never sent back.
    pub fn to_plane(&self) -> Plane {
        Plane {
            id: None,
            name: self.name.trim().to_string(),
            quantity: self.quantity,
            size: self.size.trim().to_string(),
        }
    }
}

impl From<&Plane> for PlaneRow {
    fn from(plane: &Plane) -> Self {
        Self {
            id: plane.id.clone(),
            name: plane.name.clone(),
            quantity: plane.quantity,
            size: plane.size.clone(),
        }
    }
}

/// Parses `NAME:QUANTITY:SIZE`. The size may itself contain colons.
impl FromStr for PlaneRow {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let mut parts = s.splitn(3, ':');
        let (Some(name), Some(quantity), Some(size)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(CoreError::validation(format!(
                "Expected NAME:QUANTITY:SIZE, got '{s}'"
            )));
        };

        let quantity = quantity.trim().parse::<u32>().map_err(|_| {
            CoreError::validation(format!("Quantity must be a whole number, got '{quantity}'"))
        })?;

        Ok(Self::new(name, quantity, size))
    }
}
