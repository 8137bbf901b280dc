use crate::Priority;

use std::str::FromStr;

#[test]
fn test_priority_from_str() {
    assert_eq!(Priority::from_str("urgent").unwrap(), Priority::Urgent);
    assert_eq!(Priority::from_str("low").unwrap(), Priority::Low);
    assert!(Priority::from_str("medium").is_err());
}

#[test]
fn test_priority_default_is_normal() {
    assert_eq!(Priority::default(), Priority::Normal);
}
