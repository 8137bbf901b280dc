use crate::{Client, ClientError};

use std::time::Duration;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:5000/");
    assert_eq!(client.base_url, "http://localhost:5000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:5000");
    assert_eq!(client.base_url, "http://localhost:5000");
}

#[test]
fn test_with_timeout_trims_base_url() {
    let client = Client::with_timeout("http://localhost:5000//", Duration::from_secs(5)).unwrap();
    assert_eq!(client.base_url, "http://localhost:5000");
}

#[test]
fn test_picture_url_points_at_shared_picture_route() {
    let client = Client::new("http://localhost:5000/");
    assert_eq!(
        client.picture_url("abc.png").unwrap(),
        "http://localhost:5000/api/orders/pics/abc.png"
    );
}

#[test]
fn test_picture_url_encodes_file_name() {
    let client = Client::new("http://localhost:5000");
    assert_eq!(
        client.picture_url("my kit#1?.png").unwrap(),
        "http://localhost:5000/api/orders/pics/my%20kit%231%3F.png"
    );
}

#[test]
fn test_picture_url_keeps_base_path() {
    let client = Client::new("http://localhost:5000/shop/");
    assert_eq!(
        client.picture_url("a.png").unwrap(),
        "http://localhost:5000/shop/api/orders/pics/a.png"
    );
}

#[test]
fn test_invalid_base_url_is_reported() {
    let client = Client::new("not a url");
    assert!(matches!(
        client.picture_url("a.png"),
        Err(ClientError::Url { .. })
    ));
}
