use crate::ClientError;

use hangar_core::CoreError;

use std::path::PathBuf;

#[test]
fn test_user_message_drops_location() {
    let err = ClientError::api_error("404", "Order not found");
    assert_eq!(err.user_message(), "Order not found");
    assert!(err.to_string().contains("(code: 404)"));
}

#[test]
fn test_core_errors_pass_through() {
    let err: ClientError = CoreError::validation("Name is required").into();
    assert_eq!(err.user_message(), "Name is required");
}

#[test]
fn test_io_message_names_the_path() {
    let err = ClientError::io(
        PathBuf::from("missing.png"),
        std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    );
    assert!(err.user_message().starts_with("missing.png: "));
}
