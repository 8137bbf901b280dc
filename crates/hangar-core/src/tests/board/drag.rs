use crate::{DragLocation, Status};

use std::str::FromStr;

#[test]
fn test_drag_location_parses_stage_and_index() {
    let location = DragLocation::from_str("moulding:3").unwrap();
    assert_eq!(location, DragLocation::new(Status::Moulding, 3));
}

#[test]
fn test_drag_location_tolerates_spaces() {
    let location = DragLocation::from_str(" quality : 0 ").unwrap();
    assert_eq!(location, DragLocation::new(Status::Quality, 0));
}

#[test]
fn test_drag_location_rejects_bad_input() {
    assert!(DragLocation::from_str("moulding").is_err());
    assert!(DragLocation::from_str("moulding:-1").is_err());
    assert!(DragLocation::from_str("sanding:1").is_err());
}
