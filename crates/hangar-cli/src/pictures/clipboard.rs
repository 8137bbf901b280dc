use crate::pictures::{PictureFile, is_valid_image_url};

/// One entry of pasted clipboard content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardItem {
    pub mime: String,
    pub data: Vec<u8>,
}

impl ClipboardItem {
    pub fn new(mime: &str, data: Vec<u8>) -> Self {
        Self {
            mime: mime.to_string(),
            data,
        }
    }

    pub fn text(text: &str) -> Self {
        Self::new("text/plain", text.as_bytes().to_vec())
    }

    /// Classify raw bytes piped on stdin: recognised image data or text.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        match sniff_image_mime(&data) {
            Some(mime) => Self::new(mime, data),
            None => Self::new("text/plain", data),
        }
    }
}

/// What a paste resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    /// Image data, ready to upload
    Files(Vec<PictureFile>),
    /// A pasted link to an image, to be downloaded first
    Url(String),
    /// Nothing usable
    Empty,
}

/// Resolve clipboard items.
///
/// Image items become files. The first text item that holds an image URL
/// wins over everything else.
pub fn classify_paste(items: Vec<ClipboardItem>) -> PasteOutcome {
    let mut files = Vec::new();

    for item in items {
        if item.mime.starts_with("image/") {
            let name = format!("image.{}", extension_for(&item.mime));
            files.push(PictureFile::new(&name, &item.mime, item.data));
        } else if item.mime == "text/plain" {
            let text = String::from_utf8_lossy(&item.data);
            let candidate = text.trim();
            if is_valid_image_url(candidate) {
                return PasteOutcome::Url(candidate.to_string());
            }
        }
    }

    if files.is_empty() {
        PasteOutcome::Empty
    } else {
        PasteOutcome::Files(files)
    }
}

/// Image type from magic bytes.
pub fn sniff_image_mime(data: &[u8]) -> Option<&'static str> {
    match data {
        [0x89, b'P', b'N', b'G', ..] => Some("image/png"),
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [b'G', b'I', b'F', b'8', ..] => Some("image/gif"),
        [b'B', b'M', _, _, _, _, 0, 0, 0, 0, ..] => Some("image/bmp"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        _ => None,
    }
}

/// File extension for a pasted image type.
///
/// Sniffed types use their common extension; mime_guess lists `jfif`
/// first for `image/jpeg`.
pub(crate) fn extension_for(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/bmp" => "bmp",
        other => mime_guess::get_mime_extensions_str(other)
            .and_then(|extensions| extensions.first().copied())
            .unwrap_or("png"),
    }
}
