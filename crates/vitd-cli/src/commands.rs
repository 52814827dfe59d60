use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use vitd_core::models::patient::PatientInput;
use vitd_core::models::record::PatientRecord;
use vitd_scoring::replay::{AuditOutcome, audit, rescore};
use vitd_scoring::rules::RiskLevel;
use vitd_scoring::tally::{RiskTally, tally_records};
use vitd_scoring::{SchemeId, ScoreResult, ScoringEngine, all_schemes, get_scheme};

#[derive(Debug, Clone, Serialize)]
pub struct SchemeSummary {
    pub id: SchemeId,
    pub name: String,
    pub questions: usize,
    pub max_score: f64,
    pub levels: Vec<RiskLevel>,
    pub active: bool,
}

/// A stored row the engine could not process.
#[derive(Debug, Clone, Serialize)]
pub struct RecordFailure {
    pub record_id: String,
    pub patient_number: u32,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RescoreReport {
    pub rescored: usize,
    pub failures: Vec<RecordFailure>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    pub checked: usize,
    pub mismatches: Vec<AuditOutcome>,
    pub failures: Vec<RecordFailure>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty() && self.failures.is_empty()
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> eyre::Result<T> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("failed to parse {}: {e}", path.display()))
}

/// Pretty-print `value` to `path`, or to stdout when no path is given.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> eyre::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => {
            std::fs::write(path, json.as_bytes())?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn list_schemes(active: SchemeId) -> Vec<SchemeSummary> {
    all_schemes()
        .iter()
        .map(|s| SchemeSummary {
            id: s.id(),
            name: s.name().to_string(),
            questions: s.questions().len(),
            max_score: s.max_score(),
            levels: s.levels(),
            active: s.id() == active,
        })
        .collect()
}

pub fn score_patient(input: &PatientInput, scheme_id: SchemeId) -> eyre::Result<ScoreResult> {
    let engine = ScoringEngine::new(scheme_id);
    Ok(engine.score(input)?)
}

/// Replay every row under its recorded scheme and write the results back.
///
/// Rows without a scheme are assigned `assign_untagged` when given;
/// otherwise they are reported as failures and left untouched.
pub fn rescore_records(
    records: &mut [PatientRecord],
    assign_untagged: Option<SchemeId>,
) -> RescoreReport {
    let mut report = RescoreReport::default();
    for record in records.iter_mut() {
        if record.scheme_id.is_none()
            && let Some(scheme_id) = assign_untagged
        {
            tracing::info!(
                record = %record.id,
                scheme = %scheme_id,
                "assigning scheme to untagged record"
            );
            record.scheme_id = Some(scheme_id.to_string());
        }

        match rescore(record) {
            Ok(result) => {
                result.apply_to(record);
                report.rescored += 1;
            }
            Err(e) => {
                tracing::warn!(record = %record.id, error = %e, "could not rescore record");
                report.failures.push(failure(record, e));
            }
        }
    }
    report
}

/// Rescore the rows in `input` and write only the updated rows to `out`
/// (stdout when `None`). Per-row failures are logged, never mixed into
/// the output document.
pub fn rescore_file(
    input: &Path,
    out: Option<&Path>,
    assign_untagged: Option<SchemeId>,
) -> eyre::Result<RescoreReport> {
    let mut rows: Vec<PatientRecord> = read_json(input)?;
    let report = rescore_records(&mut rows, assign_untagged);
    tracing::info!(
        rescored = report.rescored,
        failed = report.failures.len(),
        "rescore finished"
    );
    write_json(&rows, out)?;
    Ok(report)
}

pub fn audit_records(records: &[PatientRecord]) -> AuditReport {
    let mut report = AuditReport::default();
    for record in records {
        match audit(record) {
            Ok(outcome) => {
                report.checked += 1;
                if !outcome.matches {
                    report.mismatches.push(outcome);
                }
            }
            Err(e) => report.failures.push(failure(record, e)),
        }
    }
    report
}

pub fn tally(records: &[PatientRecord], scheme_id: SchemeId) -> RiskTally {
    tally_records(get_scheme(scheme_id).as_ref(), records)
}

fn failure(record: &PatientRecord, error: impl std::fmt::Display) -> RecordFailure {
    RecordFailure {
        record_id: record.id.to_string(),
        patient_number: record.patient_number,
        error: error.to_string(),
    }
}
