use hangar_core::CoreError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while talking to the order API
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (code: {code}) {location}")]
    Api {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Picture error: {message} {location}")]
    Picture {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid URL: {url} {location}")]
    Url { url: String, location: ErrorLocation },

    #[error("Prompt error: {message} {location}")]
    Prompt {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source} {location}")]
    Io {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error<C: Into<String>, M: Into<String>>(code: C, message: M) -> Self {
        ClientError::Api {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn picture<S: Into<String>>(message: S) -> Self {
        ClientError::Picture {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url<S: Into<String>>(url: S) -> Self {
        ClientError::Url {
            url: url.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn prompt<S: Into<String>>(message: S) -> Self {
        ClientError::Prompt {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        ClientError::Io {
            path,
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    /// Short description for notices, without capture locations.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { message, .. }
            | Self::Api { message, .. }
            | Self::Json { message, .. }
            | Self::Picture { message, .. }
            | Self::Prompt { message, .. } => message.clone(),
            Self::Url { url, .. } => format!("Invalid URL: {url}"),
            Self::Io { path, source, .. } => format!("{}: {source}", path.display()),
            Self::Core(err) => err.message(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
