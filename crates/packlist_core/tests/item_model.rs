use packlist_core::{Item, ItemValidationError, QUANTITY_MAX, QUANTITY_MIN};
use uuid::Uuid;

#[test]
fn item_new_trims_description_and_starts_unpacked() {
    let item = Item::new("  Socks \n", 3).unwrap();

    assert!(!item.id.is_nil());
    assert_eq!(item.description, "Socks");
    assert_eq!(item.quantity, 3);
    assert!(!item.packed);
}

#[test]
fn item_new_rejects_blank_description() {
    for blank in ["", "   ", "\t\n"] {
        assert_eq!(
            Item::new(blank, 1).unwrap_err(),
            ItemValidationError::EmptyDescription
        );
    }
}

#[test]
fn item_new_enforces_quantity_range() {
    assert!(Item::new("Hat", QUANTITY_MIN).is_ok());
    assert!(Item::new("Hat", QUANTITY_MAX).is_ok());
    assert_eq!(
        Item::new("Hat", 0).unwrap_err(),
        ItemValidationError::QuantityOutOfRange(0)
    );
    assert_eq!(
        Item::new("Hat", QUANTITY_MAX + 1).unwrap_err(),
        ItemValidationError::QuantityOutOfRange(QUANTITY_MAX + 1)
    );
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Item::with_id(Uuid::nil(), "Hat", 1).unwrap_err();
    assert_eq!(err, ItemValidationError::NilId);
}

#[test]
fn item_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let item = Item::with_id(id, "Toothbrush", 2).unwrap().with_packed(true);

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["description"], "Toothbrush");
    assert_eq!(json["quantity"], 2);
    assert_eq!(json["packed"], true);
    assert_eq!(json.as_object().unwrap().len(), 4);

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn items_with_same_fields_keep_distinct_identity() {
    let first = Item::new("Shirt", 5).unwrap();
    let second = Item::new("Shirt", 5).unwrap();

    assert_ne!(first.id, second.id);
    assert_ne!(first, second);
}
