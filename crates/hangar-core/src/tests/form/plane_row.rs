use crate::PlaneRow;

use std::str::FromStr;

#[test]
fn test_plane_row_parses_name_quantity_size() {
    let row = PlaneRow::from_str("Spitfire Mk IX:2:1:48").unwrap();

    assert_eq!(row.name, "Spitfire Mk IX");
    assert_eq!(row.quantity, 2);
    assert_eq!(row.size, "1:48");
}

#[test]
fn test_plane_row_rejects_missing_parts() {
    assert!(PlaneRow::from_str("Spitfire").is_err());
    assert!(PlaneRow::from_str("Spitfire:2").is_err());
}

#[test]
fn test_plane_row_rejects_non_numeric_quantity() {
    assert!(PlaneRow::from_str("Spitfire:two:1:48").is_err());
    assert!(PlaneRow::from_str("Spitfire:-1:1:48").is_err());
}

#[test]
fn test_default_row_needs_a_name() {
    assert_eq!(PlaneRow::default().problem(), Some("Plane name is required"));
    assert_eq!(PlaneRow::new("Zero", 1, "").problem(), Some("Size is required"));
    assert_eq!(PlaneRow::new("Zero", 1, "1:72").problem(), None);
}
