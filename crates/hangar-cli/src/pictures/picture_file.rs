use crate::{CliClientResult, ClientError};

use std::path::Path;

/// An image ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PictureFile {
    pub fn new(name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            content_type: content_type.to_string(),
            bytes,
        }
    }

    /// Read a local file; the content type is guessed from its extension.
    pub fn from_path(path: &Path) -> CliClientResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| ClientError::io(path.to_path_buf(), e))?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();

        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(Self {
            name,
            content_type,
            bytes,
        })
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}
