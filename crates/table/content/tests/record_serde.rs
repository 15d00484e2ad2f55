use table_core::{RangeSelection, TypeAndAmount};

#[test]
fn type_and_amount_deserializes_through_validation() {
    let record: TypeAndAmount = toml::from_str("kind = \"Goblin\"\nroll = \"1d4\"").unwrap();
    assert_eq!(record, TypeAndAmount::new("Goblin", "1d4").unwrap());
    assert_eq!(record.amount_range(), (1, 4));

    let err = toml::from_str::<TypeAndAmount>("kind = \"Goblin\"\nroll = \"lots\"").unwrap_err();
    assert!(err.to_string().contains("invalid Roll field 'lots'"), "{err}");

    assert!(
        toml::from_str::<TypeAndAmount>("kind = \"Gold\"\nroll = \"1d6+9223372036854775807\"")
            .is_err()
    );
}

#[test]
fn type_and_amount_serializes_stored_text() {
    let record = TypeAndAmount::new("Orc", "d6").unwrap();
    let text = toml::to_string(&record).unwrap();
    assert!(text.contains("roll = \"d6\""), "{text}");

    let back: TypeAndAmount = toml::from_str(&text).unwrap();
    assert_eq!(back, record);
}

#[test]
fn range_selection_rejects_inverted_bounds() {
    let range: RangeSelection = toml::from_str("lower = 3\nupper = 18").unwrap();
    assert_eq!(range, RangeSelection::new(3, 18));

    assert!(toml::from_str::<RangeSelection>("lower = 18\nupper = 3").is_err());
}
