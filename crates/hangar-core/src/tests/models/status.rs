use crate::Status;

use std::str::FromStr;

#[test]
fn test_status_as_str_round_trips_through_from_str() {
    for status in Status::BOARD.iter().chain(std::iter::once(&Status::Done)) {
        assert_eq!(Status::from_str(status.as_str()).unwrap(), *status);
    }
}

#[test]
fn test_status_from_str_rejects_unknown() {
    assert!(Status::from_str("painting").is_err());
    assert!(Status::from_str("Pending").is_err());
}

#[test]
fn test_status_default_is_pending() {
    assert_eq!(Status::default(), Status::Pending);
}

#[test]
fn test_board_order_is_fixed() {
    let names: Vec<&str> = Status::BOARD.iter().map(Status::as_str).collect();
    assert_eq!(
        names,
        vec![
            "pending", "moulding", "putty", "artist", "detail", "quality", "shipped"
        ]
    );
}

#[test]
fn test_done_is_not_a_board_stage() {
    assert_eq!(Status::Done.board_position(), None);
    assert_eq!(Status::Shipped.board_position(), Some(6));
}

#[test]
fn test_status_labels() {
    assert_eq!(Status::Putty.label(), "Putty and Spray");
    assert_eq!(Status::Detail.label(), "Detailing");
}

#[test]
fn test_status_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&Status::Moulding).unwrap(),
        "\"moulding\""
    );
}
