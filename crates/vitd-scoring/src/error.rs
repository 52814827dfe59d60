use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use vitd_core::error::CoreError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown scoring scheme: {0}")]
    UnknownScheme(String),

    #[error("record {record_id} has no scoring scheme recorded")]
    MissingScheme { record_id: String },

    #[error("unknown question '{question_id}' for scheme '{scheme_id}'")]
    UnknownQuestion {
        scheme_id: String,
        question_id: String,
    },

    #[error("invalid answer: {0}")]
    InvalidAnswer(#[from] AnswerValidationError),

    #[error("unknown risk level: {0}")]
    UnknownRiskLevel(String),

    #[error("invalid patient input: {0}")]
    Input(#[from] CoreError),
}

/// A form value that does not belong to its question's option set.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct AnswerValidationError {
    pub question_id: String,
    pub value: String,
    /// Canonical codes the question accepts; empty for unknown questions.
    pub expected: Vec<String>,
    pub message: String,
}
