use std::fmt;

use log::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Success,
    Info,
    Error,
}

/// A transient, user-facing message about the outcome of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn success<S: Into<String>>(description: S) -> Self {
        Self {
            title: "Success",
            description: description.into(),
            variant: NoticeVariant::Success,
        }
    }

    pub fn info<S: Into<String>>(description: S) -> Self {
        Self {
            title: "Info",
            description: description.into(),
            variant: NoticeVariant::Info,
        }
    }

    pub fn error<S: Into<String>>(description: S) -> Self {
        Self {
            title: "Error",
            description: description.into(),
            variant: NoticeVariant::Error,
        }
    }

    /// Log the notice and show it on stderr.
    pub fn emit(&self) {
        match self.variant {
            NoticeVariant::Error => error!("{}", self.description),
            _ => info!("{}", self.description),
        }
        eprintln!("{self}");
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.title, self.description)
    }
}
