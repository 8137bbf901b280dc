use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;

static IMAGE_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(jpg|jpeg|png|gif|webp|bmp|svg)$").unwrap());

/// An absolute URL ending in a known image extension.
pub fn is_valid_image_url(url: &str) -> bool {
    Url::parse(url).is_ok() && IMAGE_EXTENSION.is_match(url)
}

/// Last path segment of the URL, `image` when there is none.
pub fn file_name_from_url(url: &str) -> String {
    match url.rsplit('/').next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => String::from("image"),
    }
}
