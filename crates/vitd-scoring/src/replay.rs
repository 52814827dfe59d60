//! Re-scoring of stored patient rows.
//!
//! A row is only ever replayed under the scheme recorded on it; rows
//! without a scheme tag are refused rather than guessed at.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use vitd_core::models::record::PatientRecord;

use crate::SchemeId;
use crate::engine::{ScoreResult, score};
use crate::error::ScoringError;
use crate::rules::RiskLevel;

const SCORE_TOLERANCE: f64 = 1e-9;

impl ScoreResult {
    /// Write the computed fields onto a stored row.
    ///
    /// Unknown height and BMI are stored as absent rather than zero.
    pub fn apply_to(&self, record: &mut PatientRecord) {
        record.height_meters = (self.height_meters > 0.0).then_some(self.height_meters);
        record.bmi = (self.bmi > 0.0).then_some(self.bmi);
        record.section_a_score = Some(self.section_a_score);
        record.section_b_score = Some(self.section_b_score);
        record.total_score = Some(self.composite_score);
        record.risk_level = Some(self.classification.to_string());
        record.scheme_id = Some(self.scheme_id.to_string());
        record.questionnaire_responses = Some(self.responses());
        record.updated_at = jiff::Timestamp::now();
    }
}

/// The scheme a stored row was scored under.
pub fn recorded_scheme(record: &PatientRecord) -> Result<SchemeId, ScoringError> {
    record
        .scheme_id
        .as_deref()
        .ok_or_else(|| ScoringError::MissingScheme {
            record_id: record.id.to_string(),
        })?
        .parse()
}

/// Recompute a stored row under its recorded scheme.
pub fn rescore(record: &PatientRecord) -> Result<ScoreResult, ScoringError> {
    let scheme_id = recorded_scheme(record)?;
    let input = record.to_input()?;
    score(&input, scheme_id)
}

/// Stored versus recomputed result for one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuditOutcome {
    pub record_id: Uuid,
    pub patient_number: u32,
    pub scheme_id: SchemeId,
    pub stored_score: Option<f64>,
    pub recomputed_score: f64,
    pub stored_level: Option<String>,
    pub recomputed_level: RiskLevel,
    pub matches: bool,
}

/// Replay a row and compare it with what was stored.
pub fn audit(record: &PatientRecord) -> Result<AuditOutcome, ScoringError> {
    let result = rescore(record)?;

    let score_matches = record
        .total_score
        .is_some_and(|stored| (stored - result.composite_score).abs() < SCORE_TOLERANCE);
    let level_matches = record
        .risk_level
        .as_deref()
        .and_then(|stored| stored.parse::<RiskLevel>().ok())
        == Some(result.classification);

    if !(score_matches && level_matches) {
        tracing::warn!(
            record = %record.id,
            scheme = %result.scheme_id,
            stored = ?record.total_score,
            recomputed = result.composite_score,
            "stored score does not match replay"
        );
    }

    Ok(AuditOutcome {
        record_id: record.id,
        patient_number: record.patient_number,
        scheme_id: result.scheme_id,
        stored_score: record.total_score,
        recomputed_score: result.composite_score,
        stored_level: record.risk_level.clone(),
        recomputed_level: result.classification,
        matches: score_matches && level_matches,
    })
}
