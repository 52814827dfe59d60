use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use vitd_core::models::patient::PatientInput;

use crate::anthropometry;
use crate::error::ScoringError;
use crate::rules::{RiskLevel, Section};
use crate::{Scheme, SchemeId, get_scheme};

/// One rule's contribution, kept for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreComponent {
    pub question_id: String,
    pub section: Section,
    /// Canonical code of the selected option; `None` when unanswered.
    pub option_code: Option<String>,
    pub points: f64,
    /// True when the answer was resolved from patient facts rather than
    /// taken from the form.
    pub derived: bool,
}

/// The engine's output for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub scheme_id: SchemeId,
    pub height_meters: f64,
    /// `0.0` when height was not captured.
    pub bmi: f64,
    pub section_a_score: f64,
    pub section_b_score: f64,
    /// Sum of both sections, floored at zero.
    pub composite_score: f64,
    pub classification: RiskLevel,
    pub components: Vec<ScoreComponent>,
}

impl ScoreResult {
    /// Canonical answers, including the ones resolved from facts.
    pub fn responses(&self) -> BTreeMap<String, String> {
        self.components
            .iter()
            .filter_map(|c| {
                c.option_code
                    .as_ref()
                    .map(|code| (c.question_id.clone(), code.clone()))
            })
            .collect()
    }
}

/// Score `input` under `scheme`.
///
/// Unanswered questions contribute nothing. Fixed rules always take the
/// value implied by the patient's facts, whatever the form said; prefilled
/// questions use the form's answer and fall back to the facts when blank.
pub fn score_with(input: &PatientInput, scheme: &dyn Scheme) -> Result<ScoreResult, ScoringError> {
    input.validate()?;
    let facts = anthropometry::normalize(input.height_feet, input.height_inches, input.weight_kg);
    let answers = scheme.resolve_answers(&input.answers)?;

    let mut section_a_score = 0.0;
    let mut section_b_score = 0.0;
    let mut components = Vec::with_capacity(scheme.questions().len());

    for question in scheme.questions() {
        let supplied = answers.get(&question.id);
        let (option, derived) = match (question.derived_from, question.prefill_from, supplied) {
            (Some(fact), _, _) => {
                let option = question.yes_no_option(fact.holds(input, &facts));
                if let (Some(supplied), Some(option)) = (supplied, option)
                    && supplied.code != option.code
                {
                    tracing::warn!(
                        scheme = %scheme.id(),
                        question = %question.id,
                        supplied = %supplied.code,
                        derived = %option.code,
                        "supplied answer contradicts patient facts, using derived value"
                    );
                }
                (option, true)
            }
            (None, Some(fact), None) => (question.yes_no_option(fact.holds(input, &facts)), true),
            (None, _, supplied) => (supplied, false),
        };

        let points = option.map_or(0.0, |o| o.points);
        match question.section {
            Section::A => section_a_score += points,
            Section::B => section_b_score += points,
        }
        components.push(ScoreComponent {
            question_id: question.id.clone(),
            section: question.section,
            option_code: option.map(|o| o.code.clone()),
            points,
            derived,
        });
    }

    let composite_score = f64::max(section_a_score + section_b_score, 0.0);
    let classification = scheme.classify(composite_score);

    tracing::debug!(
        scheme = %scheme.id(),
        bmi = facts.bmi,
        score = composite_score,
        level = %classification,
        "scored patient"
    );

    Ok(ScoreResult {
        scheme_id: scheme.id(),
        height_meters: facts.height_meters,
        bmi: facts.bmi,
        section_a_score,
        section_b_score,
        composite_score,
        classification,
        components,
    })
}

/// Score `input` under the scheme named by `scheme_id`.
pub fn score(input: &PatientInput, scheme_id: SchemeId) -> Result<ScoreResult, ScoringError> {
    score_with(input, get_scheme(scheme_id).as_ref())
}

/// Stateless scorer bound to one active scheme.
pub struct ScoringEngine {
    scheme: Box<dyn Scheme>,
}

impl ScoringEngine {
    pub fn new(scheme_id: SchemeId) -> Self {
        Self {
            scheme: get_scheme(scheme_id),
        }
    }

    pub fn scheme(&self) -> &dyn Scheme {
        self.scheme.as_ref()
    }

    pub fn scheme_id(&self) -> SchemeId {
        self.scheme.id()
    }

    pub fn score(&self, input: &PatientInput) -> Result<ScoreResult, ScoringError> {
        score_with(input, self.scheme.as_ref())
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(SchemeId::default())
    }
}
