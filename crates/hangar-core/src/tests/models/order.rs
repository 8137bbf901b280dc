use crate::tests::order;
use crate::{Order, Priority, Status};

use chrono::{Duration, TimeZone, Utc};
use serde_json::json;

#[test]
fn test_order_deserializes_server_document() {
    let value = json!({
        "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
        "name": "Jane Doe",
        "planes": [
            { "_id": "p1", "name": "Mustang", "quantity": 2, "size": "1:72" }
        ],
        "status": "moulding",
        "priority": "urgent",
        "index": 3,
        "createdAt": "2024-03-01T10:00:00.000Z",
        "pics": ["a.jpg"],
        "__v": 0
    });

    let order: Order = serde_json::from_value(value).unwrap();

    assert_eq!(order.id, "65a1f0c2e4b0a1b2c3d4e5f6");
    assert_eq!(order.status, Status::Moulding);
    assert_eq!(order.priority, Priority::Urgent);
    assert_eq!(order.index, Some(3));
    assert_eq!(order.planes[0].id.as_deref(), Some("p1"));
    assert_eq!(order.total_quantity(), 2);
    assert!(order.completed_at.is_none());
}

#[test]
fn test_order_missing_priority_defaults_to_normal() {
    let value = json!({
        "_id": "x",
        "name": "No Priority",
        "status": "pending",
        "createdAt": "2024-03-01T10:00:00Z"
    });

    let order: Order = serde_json::from_value(value).unwrap();
    assert_eq!(order.priority, Priority::Normal);
    assert!(order.planes.is_empty());
}

#[test]
fn test_due_date_is_creation_plus_lead_time() {
    let order = order("a", Status::Pending);
    assert_eq!(order.due_date(60), order.created_at + Duration::days(60));
}

#[test]
fn test_is_overdue() {
    let order = order("a", Status::Pending);
    let before = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    let after = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();

    assert!(!order.is_overdue(before, 60));
    assert!(order.is_overdue(after, 60));
}

#[test]
fn test_production_days() {
    let mut order = order("a", Status::Done);
    assert_eq!(order.production_days(), None);

    order.completed_at = Some(order.created_at + Duration::hours(24 * 9 + 5));
    assert_eq!(order.production_days(), Some(9));
}
