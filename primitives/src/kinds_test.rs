use super::*;

#[test]
fn side_codes_match_wire_values() {
    assert_eq!(Side::Ally.code(), -1);
    assert_eq!(Side::Neutral.code(), 0);
    assert_eq!(Side::Enemy.code(), 1);
}

#[test]
fn side_rejects_unknown_code() {
    let err = Side::try_from(2).expect_err("unknown side");
    assert!(matches!(err, CodecError::UnknownCode { kind: "side", code: 2 }));
}

#[test]
fn unit_type_codes_are_sequential() {
    for (expected, unit_type) in (0..).zip(UnitType::ALL) {
        assert_eq!(unit_type.code(), expected);
        assert_eq!(UnitType::try_from(expected).expect("known code"), unit_type);
    }
}

#[test]
fn area_type_round_trips_through_json_integer() {
    let json = serde_json::to_string(&AreaType::Swamp).expect("serialize");
    assert_eq!(json, "2");
    let back: AreaType = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, AreaType::Swamp);
}

#[test]
fn area_type_rejects_unknown_code_during_decode() {
    let err = serde_json::from_str::<AreaType>("9").expect_err("unknown area");
    assert!(err.to_string().contains("area_type"));
}

#[test]
fn defaults_are_neutral_and_unknown() {
    assert_eq!(Side::default(), Side::Neutral);
    assert_eq!(UnitType::default(), UnitType::Unknown);
    assert_eq!(AreaType::default(), AreaType::Unknown);
}
