mod clipboard;
mod image_url;
mod picture_file;

pub use clipboard::{ClipboardItem, PasteOutcome, classify_paste, sniff_image_mime};
pub(crate) use clipboard::extension_for;
pub use image_url::{file_name_from_url, is_valid_image_url};
pub use picture_file::PictureFile;
