use rollbook_core::Record;

#[test]
fn record_new_keeps_identity_and_score() {
    let record = Record::new(3, "Raj", 78.0);

    assert_eq!(record.id(), 3);
    assert_eq!(record.name(), "Raj");
    assert_eq!(record.score(), 78.0);
}

#[test]
fn record_display_matches_console_listing() {
    assert_eq!(Record::new(1, "Amit", 85.5).to_string(), "1 - Amit : 85.5");
    assert_eq!(Record::new(2, "Neha", 95.0).to_string(), "2 - Neha : 95.0");
}

#[test]
fn record_serialization_uses_expected_wire_fields() {
    let record = Record::new(2, "Neha", 90.0);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], 2);
    assert_eq!(json["name"], "Neha");
    assert_eq!(json["score"], 90.0);

    let decoded: Record = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}
