mod common;

use common::{answers_map, patient, scheme_c_baseline, with};
use vitd_core::models::patient::PatientInput;
use vitd_scoring::anthropometry::DerivedFacts;
use vitd_scoring::rules::{DerivedFact, RiskLevel};
use vitd_scoring::{SchemeId, ScoringEngine, score};

fn score_c(input: &PatientInput) -> vitd_scoring::ScoreResult {
    score(input, SchemeId::SchemeC).unwrap()
}

#[test]
fn high_risk_patient_scores_12_75() {
    let answers = with(
        scheme_c_baseline(),
        &[
            ("q1", "yes"),
            ("q2", "yes"),
            ("q3", "fair"),
            ("q4", "full"),
            ("q5", "negligible"),
            ("q7", "yes"),
            ("q8", "no_intake"),
            ("q13", "often"),
            ("q14", "often"),
            ("q15", "often"),
            ("q16", "often"),
            ("q17", "often"),
        ],
    );
    let result = score_c(&patient(60, 85.0, &answers));

    assert_eq!(result.bmi, 32.17);
    assert_eq!(result.composite_score, 12.75);
    assert_eq!(result.section_a_score, 0.0);
    assert_eq!(result.section_b_score, 12.75);
    assert_eq!(result.classification, RiskLevel::Inadequate);
}

#[test]
fn supplementation_is_floored_at_zero() {
    let answers = with(scheme_c_baseline(), &[("q18", "yes")]);
    let result = score_c(&patient(40, 50.0, &answers));

    assert_eq!(result.section_b_score, -5.0);
    assert_eq!(result.composite_score, 0.0);
    assert_eq!(result.classification, RiskLevel::Adequate);
}

#[test]
fn every_low_risk_answer_with_supplementation_stays_non_negative() {
    let answers = with(scheme_c_baseline(), &[("q18", "yes"), ("q3", "wheatish")]);
    let result = score_c(&patient(30, 48.0, &answers));
    assert!(result.composite_score >= 0.0);
}

#[test]
fn score_of_exactly_five_is_inadequate() {
    let mut input = patient(40, 50.0, &[("q4", "full"), ("q5", "less_30")]);
    input.height_feet = None;
    input.height_inches = None;

    let result = score_c(&input);
    assert_eq!(result.bmi, 0.0);
    assert_eq!(result.composite_score, 5.0);
    assert_eq!(result.classification, RiskLevel::Inadequate);
}

#[test]
fn score_just_below_five_is_adequate() {
    let input = patient(
        40,
        50.0,
        &[
            ("q4", "full"),
            ("q3", "fair"),
            ("q8", "occasional"),
            ("q13", "sometimes"),
            ("q14", "sometimes"),
        ],
    );
    let result = score_c(&input);
    assert_eq!(result.composite_score, 4.75);
    assert_eq!(result.classification, RiskLevel::Adequate);
}

#[test]
fn bmi_of_exactly_thirty_counts() {
    let facts = DerivedFacts {
        height_meters: 1.6256,
        bmi: 30.0,
    };
    let input = patient(40, 79.28, &[]);
    assert!(DerivedFact::BmiAtLeast { bmi: 30.0 }.holds(&input, &facts));

    // 79.28 kg at 1.6256 m rounds to 30.00.
    let result = score_c(&input);
    assert_eq!(result.bmi, 30.0);
    assert_eq!(result.composite_score, 1.0);
}

#[test]
fn bmi_just_below_thirty_does_not_count() {
    let result = score_c(&patient(40, 79.25, &[]));
    assert_eq!(result.bmi, 29.99);
    assert_eq!(result.composite_score, 0.0);
}

#[test]
fn zero_height_leaves_bmi_row_to_the_form() {
    let mut input = patient(70, 70.0, &[]);
    input.height_feet = Some(0);
    input.height_inches = Some(0);

    let result = score_c(&input);
    assert_eq!(result.height_meters, 0.0);
    assert_eq!(result.bmi, 0.0);
    // Blank BMI row cannot be filled without a height; only age scores.
    assert_eq!(result.composite_score, 0.5);

    input.answers = answers_map(&[("q2", "yes")]);
    let result = score_c(&input);
    assert_eq!(result.bmi, 0.0);
    assert_eq!(result.composite_score, 1.5);
}

#[test]
fn answered_fact_rows_score_from_the_table() {
    let mut input = patient(45, 95.0, &[("q1", "yes"), ("q2", "yes"), ("q12", "yes")]);
    input.height_feet = None;
    input.height_inches = None;

    let result = score_c(&input);
    let row = |id: &str| {
        result
            .components
            .iter()
            .find(|c| c.question_id == id)
            .unwrap()
            .clone()
    };
    assert_eq!(row("q1").points, 0.5);
    assert_eq!(row("q2").points, 1.0);
    assert_eq!(row("q12").points, 1.0);
    assert!(!row("q1").derived);
    assert_eq!(result.composite_score, 2.5);
}

#[test]
fn answered_no_wins_over_patient_facts() {
    let mut input = patient(62, 85.0, &[("q1", "no"), ("q2", "no"), ("q12", "no")]);
    input.comorbidities.diabetes = true;

    let result = score_c(&input);
    assert_eq!(result.bmi, 32.17);
    assert_eq!(result.composite_score, 0.0);

    let age_row = result
        .components
        .iter()
        .find(|c| c.question_id == "q1")
        .unwrap();
    assert!(!age_row.derived);
    assert_eq!(age_row.option_code.as_deref(), Some("no"));
}

#[test]
fn blank_fact_rows_are_filled_from_patient_facts() {
    let result = score_c(&patient(62, 85.0, &[("q1", " ")]));
    let age_row = result
        .components
        .iter()
        .find(|c| c.question_id == "q1")
        .unwrap();
    assert!(age_row.derived);
    assert_eq!(age_row.option_code.as_deref(), Some("yes"));
    assert_eq!(result.composite_score, 1.5);
}

#[test]
fn comorbidity_row_follows_recorded_conditions() {
    let mut input = patient(40, 50.0, &[]);
    assert_eq!(score_c(&input).composite_score, 0.0);

    input.comorbidities.diabetes = true;
    assert_eq!(score_c(&input).composite_score, 1.0);

    input.comorbidities.diabetes = false;
    input.comorbidities.other = Some("asthma".to_string());
    assert_eq!(score_c(&input).composite_score, 1.0);
}

#[test]
fn unanswered_questions_contribute_nothing() {
    let result = score_c(&patient(40, 50.0, &[]));
    assert_eq!(result.components.len(), 18);
    assert_eq!(result.composite_score, 0.0);

    let unanswered = result
        .components
        .iter()
        .filter(|c| c.option_code.is_none())
        .count();
    // Blank q1, q2 and q12 are filled in from facts.
    assert_eq!(unanswered, 15);
}

#[test]
fn scoring_is_deterministic() {
    let input = patient(
        55,
        72.4,
        &[("q3", "wheatish"), ("q5", "less_30"), ("q16", "sometimes")],
    );
    let engine = ScoringEngine::new(SchemeId::SchemeC);
    let first = engine.score(&input).unwrap();
    let second = engine.score(&input).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.composite_score.to_bits(),
        second.composite_score.to_bits()
    );
}

#[test]
fn three_tier_variant_uses_superseded_cuts() {
    let engine = ScoringEngine::new(SchemeId::SchemeCThreeTier);
    let scheme = engine.scheme();

    assert_eq!(scheme.classify(4.75), RiskLevel::Sufficient);
    assert_eq!(scheme.classify(5.0), RiskLevel::Insufficient);
    assert_eq!(scheme.classify(7.75), RiskLevel::Insufficient);
    assert_eq!(scheme.classify(8.0), RiskLevel::Deficient);

    let input = patient(40, 50.0, &[("q4", "full"), ("q5", "negligible"), ("q7", "yes")]);
    let result = engine.score(&input).unwrap();
    assert_eq!(result.composite_score, 7.0);
    assert_eq!(result.classification, RiskLevel::Insufficient);
    assert_eq!(result.scheme_id, SchemeId::SchemeCThreeTier);
}

#[test]
fn responses_are_canonical_codes() {
    let input = patient(40, 50.0, &[("q4", "Option3"), ("q13", " OFTEN ")]);
    let result = score_c(&input);
    let responses = result.responses();

    assert_eq!(responses.get("q4").map(String::as_str), Some("full"));
    assert_eq!(responses.get("q13").map(String::as_str), Some("often"));
    assert_eq!(responses.get("q1").map(String::as_str), Some("no"));
    assert_eq!(responses, {
        let mut expected = answers_map(&[("q4", "full"), ("q13", "often")]);
        expected.insert("q1".to_string(), "no".to_string());
        expected.insert("q2".to_string(), "no".to_string());
        expected.insert("q12".to_string(), "no".to_string());
        expected
    });
}
