use uuid::Uuid;
use vitd_core::models::record::PatientRecord;
use vitd_scoring::rules::RiskLevel;
use vitd_scoring::tally::{RiskTally, tally, tally_records};
use vitd_scoring::{SchemeId, get_scheme};

fn record_with_level(level: Option<&str>) -> PatientRecord {
    let mut record = PatientRecord::new(Uuid::new_v4(), 1, "XY");
    record.risk_level = level.map(str::to_string);
    record
}

#[test]
fn empty_tally_lists_every_label() {
    let tally = RiskTally::for_scheme(get_scheme(SchemeId::SchemeB).as_ref());
    assert_eq!(tally.counts.len(), 3);
    assert_eq!(tally.count(RiskLevel::High), 0);
    assert_eq!(tally.total(), 0);
}

#[test]
fn counts_levels_and_unscored() {
    let scheme = get_scheme(SchemeId::SchemeC);
    let tally = tally(
        scheme.as_ref(),
        [
            Some(RiskLevel::Adequate),
            Some(RiskLevel::Inadequate),
            Some(RiskLevel::Inadequate),
            None,
        ],
    );

    assert_eq!(tally.count(RiskLevel::Adequate), 1);
    assert_eq!(tally.count(RiskLevel::Inadequate), 2);
    assert_eq!(tally.unscored, 1);
    assert_eq!(tally.total(), 4);
}

#[test]
fn stored_labels_are_parsed() {
    let records = vec![
        record_with_level(Some("Low Risk")),
        record_with_level(Some("High Risk")),
        record_with_level(Some("high risk")),
        record_with_level(Some("garbled")),
        record_with_level(None),
    ];
    let tally = tally_records(get_scheme(SchemeId::SchemeA).as_ref(), &records);

    assert_eq!(tally.count(RiskLevel::Low), 1);
    assert_eq!(tally.count(RiskLevel::Moderate), 0);
    assert_eq!(tally.count(RiskLevel::High), 2);
    assert_eq!(tally.unscored, 2);
    assert_eq!(tally.total(), 5);
}

#[test]
fn tally_serializes_with_stored_label_text() {
    let tally = tally(
        get_scheme(SchemeId::SchemeA).as_ref(),
        [Some(RiskLevel::Moderate)],
    );
    let json = serde_json::to_value(&tally).unwrap();
    assert_eq!(json["counts"]["Moderate Risk"], 1);
    assert_eq!(json["counts"]["Low Risk"], 0);
    assert_eq!(json["unscored"], 0);
}
