use vitd_scoring::error::ScoringError;
use vitd_scoring::rules::{RiskLevel, Section};
use vitd_scoring::{SchemeId, all_schemes, find_scheme, get_scheme};

#[test]
fn every_scheme_is_registered_once() {
    let ids: Vec<SchemeId> = all_schemes().iter().map(|s| s.id()).collect();
    assert_eq!(ids, SchemeId::ALL.to_vec());
}

#[test]
fn scheme_tags_round_trip() {
    for id in SchemeId::ALL {
        assert_eq!(id.as_str().parse::<SchemeId>().unwrap(), id);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}

#[test]
fn unknown_scheme_is_refused() {
    assert!(matches!(
        "scheme_z".parse::<SchemeId>(),
        Err(ScoringError::UnknownScheme(tag)) if tag == "scheme_z"
    ));
    assert!(find_scheme("").is_err());
    assert_eq!(find_scheme("SCHEME_B").unwrap().id(), SchemeId::SchemeB);
}

#[test]
fn current_scheme_is_c() {
    assert_eq!(SchemeId::default(), SchemeId::SchemeC);
}

#[test]
fn rule_tables_have_expected_shape() {
    let a = get_scheme(SchemeId::SchemeA);
    let b = get_scheme(SchemeId::SchemeB);
    let c = get_scheme(SchemeId::SchemeC);

    assert_eq!(a.questions().len(), 2);
    assert!(a.questions().iter().all(|q| q.section == Section::A));

    assert_eq!(b.questions().len(), 14);
    let questionnaire = b.questions().iter().filter(|q| q.section == Section::B).count();
    assert_eq!(questionnaire, 12);

    assert_eq!(c.questions().len(), 18);
    assert!(c.questions().iter().all(|q| q.section == Section::B));
    assert_eq!(c.levels(), vec![RiskLevel::Adequate, RiskLevel::Inadequate]);
}

#[test]
fn question_ids_are_unique_within_each_scheme() {
    for scheme in all_schemes() {
        let mut ids: Vec<&str> = scheme.questions().iter().map(|q| q.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "duplicate question id in {}", scheme.id());
    }
}

#[test]
fn maximum_scores() {
    assert_eq!(get_scheme(SchemeId::SchemeA).max_score(), 2.0);
    assert_eq!(get_scheme(SchemeId::SchemeB).max_score(), 18.0);
    assert_eq!(get_scheme(SchemeId::SchemeC).max_score(), 18.0);
}

#[test]
fn risk_levels_parse_stored_text() {
    for level in RiskLevel::ALL {
        assert_eq!(level.as_str().parse::<RiskLevel>().unwrap(), level);
        let json = serde_json::to_string(&level).unwrap();
        assert_eq!(json, format!("\"{level}\""));
    }
    assert!("Very High Risk".parse::<RiskLevel>().is_err());
}
