use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid status: {value} {location}")]
    InvalidStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid drag: {message} {location}")]
    InvalidDrag {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_drag<S: Into<String>>(message: S) -> Self {
        CoreError::InvalidDrag {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The bare message, without the capture location.
    ///
    /// Used where the error ends up in front of a person rather than in a log.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } | Self::InvalidDrag { message, .. } => {
                message.clone()
            }
            Self::InvalidStatus { value, .. } => format!("Unknown status '{value}'"),
            Self::InvalidPriority { value, .. } => format!("Unknown priority '{value}'"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
