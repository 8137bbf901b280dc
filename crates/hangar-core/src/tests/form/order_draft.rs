use crate::{CoreError, OrderDraft, PlaneRow, Priority, Status};

fn message(err: CoreError) -> String {
    err.message()
}

#[test]
fn given_new_draft_then_it_has_one_blank_row_and_normal_priority() {
    let draft = OrderDraft::new();

    assert_eq!(draft.planes(), &[PlaneRow::default()]);
    assert_eq!(draft.planes()[0].quantity, 1);
    assert_eq!(draft.priority, Priority::Normal);
}

#[test]
fn given_complete_draft_when_validated_then_payload_is_pending() {
    let draft = OrderDraft::from_rows(
        "  Jane Doe ",
        Priority::High,
        vec![
            PlaneRow::new("Spitfire", 2, "1:48"),
            PlaneRow::new("Zero", 1, "1:72"),
        ],
    );

    let payload = draft.validate().unwrap();

    assert_eq!(payload.name, "Jane Doe");
    assert_eq!(payload.status, Status::Pending);
    assert_eq!(payload.priority, Priority::High);
    assert_eq!(payload.planes.len(), 2);
    assert_eq!(payload.planes[0].quantity, 2);
}

#[test]
fn given_blank_name_when_validated_then_rejected() {
    let draft = OrderDraft::from_rows("   ", Priority::Low, vec![PlaneRow::new("Zero", 1, "1:72")]);

    assert_eq!(message(draft.validate().unwrap_err()), "Name is required");
}

#[test]
fn given_untouched_blank_row_when_validated_then_rejected() {
    let mut draft = OrderDraft::new();
    draft.name = "Jane".to_string();

    assert_eq!(
        message(draft.validate().unwrap_err()),
        "Plane 1: Plane name is required"
    );
}

#[test]
fn given_zero_quantity_when_validated_then_rejected() {
    let draft = OrderDraft::from_rows("Jane", Priority::Normal, vec![PlaneRow::new("Zero", 0, "1:72")]);

    assert_eq!(
        message(draft.validate().unwrap_err()),
        "Plane 1: Quantity must be at least 1"
    );
}

#[test]
fn given_added_row_left_blank_when_validated_then_second_row_is_reported() {
    let mut draft =
        OrderDraft::from_rows("Jane", Priority::Normal, vec![PlaneRow::new("Zero", 1, "1:72")]);
    let added = draft.add_plane();

    assert_eq!(added, 1);
    assert_eq!(draft.planes().len(), 2);

    let err = draft.validate().unwrap_err();
    assert!(message(err).starts_with("Plane 2:"));

    let row = draft.plane_mut(1).unwrap();
    row.name = "Corsair".to_string();
    row.size = "1:32".to_string();
    assert!(draft.validate().is_ok());
}

#[test]
fn test_new_order_serializes_to_wire_shape() {
    let payload = OrderDraft::from_rows("Jane", Priority::Urgent, vec![PlaneRow::new("Zero", 3, "1:72")])
        .validate()
        .unwrap();

    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({
            "name": "Jane",
            "planes": [{ "name": "Zero", "quantity": 3, "size": "1:72" }],
            "status": "pending",
            "priority": "urgent"
        })
    );
}
