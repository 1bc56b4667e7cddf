use super::*;

use std::collections::HashSet;

#[test]
fn placeholder_roster_has_requested_size() {
    assert_eq!(placeholder_roster(50).len(), 50);
}

#[test]
fn placeholder_roster_is_one_based_and_zero_padded() {
    let roster = placeholder_roster(50);
    assert_eq!(roster[0].name, "Participant 1");
    assert_eq!(roster[0].registration, "REG00001");
    assert_eq!(roster[49].name, "Participant 50");
    assert_eq!(roster[49].registration, "REG00050");
}

#[test]
fn placeholder_roster_registrations_are_unique() {
    let roster = placeholder_roster(50);
    let unique: HashSet<&str> = roster.iter().map(|p| p.registration.as_str()).collect();
    assert_eq!(unique.len(), roster.len());
}

#[test]
fn placeholder_roster_zero_is_empty() {
    assert!(placeholder_roster(0).is_empty());
}

#[test]
fn placeholder_roster_pads_past_five_digits() {
    let roster = placeholder_roster(100_000);
    assert_eq!(roster[99_999].registration, "REG100000");
}

#[test]
fn roster_from_json_parses_participant_array() {
    let json = r#"[
        {"name": "Ada Lovelace", "registration": "REG00001"},
        {"name": "Alan Turing", "registration": "REG00002"}
    ]"#;
    let roster = roster_from_json(json).expect("parse");
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].name, "Ada Lovelace");
    assert_eq!(roster[1].registration, "REG00002");
}

#[test]
fn roster_from_json_preserves_order() {
    let json = r#"[
        {"name": "B", "registration": "2"},
        {"name": "A", "registration": "1"}
    ]"#;
    let roster = roster_from_json(json).expect("parse");
    assert_eq!(roster[0].registration, "2");
    assert_eq!(roster[1].registration, "1");
}

#[test]
fn roster_from_json_accepts_empty_array() {
    assert!(roster_from_json("[]").expect("parse").is_empty());
}

#[test]
fn roster_from_json_rejects_invalid_json() {
    let err = roster_from_json("not json").expect_err("parse should fail");
    assert!(matches!(err, RosterError::Malformed(_)));
}

#[test]
fn roster_from_json_rejects_wrong_shape() {
    let err = roster_from_json(r#"[{"name": "no registration"}]"#)
        .expect_err("parse should fail");
    assert!(matches!(err, RosterError::Malformed(_)));
}

#[test]
fn participant_serializes_with_both_fields() {
    let p = Participant {
        name: "Ada Lovelace".to_owned(),
        registration: "REG00001".to_owned(),
    };
    let json = serde_json::to_string(&p).expect("serialize");
    assert_eq!(
        json,
        r#"{"name":"Ada Lovelace","registration":"REG00001"}"#
    );
}
