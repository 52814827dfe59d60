//! vitd-scoring
//!
//! Vitamin-D deficiency risk scoring. Pure computation with no I/O and no
//! shared state. Each scoring scheme is an immutable rule table plus a
//! threshold table; historical schemes stay registered so stored results
//! can be replayed under the scheme they were recorded with.

pub mod answers;
pub mod anthropometry;
pub mod engine;
pub mod error;
pub mod replay;
pub mod rules;
pub mod schemes;
pub mod tally;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use engine::{ScoreComponent, ScoreResult, ScoringEngine, score, score_with};
use error::{AnswerValidationError, ScoringError};
use rules::{Question, RiskLevel, Thresholds};

/// Identifies a scoring scheme. Persisted next to every scored record.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SchemeId {
    /// Age/BMI rules only.
    SchemeA,
    /// Section A plus the 12-question additive questionnaire.
    SchemeB,
    /// 18-question weighted questionnaire, Adequate/Inadequate.
    #[default]
    SchemeC,
    /// Scheme C rules with the superseded three-tier classification.
    SchemeCThreeTier,
}

impl SchemeId {
    pub const ALL: [SchemeId; 4] = [
        SchemeId::SchemeA,
        SchemeId::SchemeB,
        SchemeId::SchemeC,
        SchemeId::SchemeCThreeTier,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeId::SchemeA => "scheme_a",
            SchemeId::SchemeB => "scheme_b",
            SchemeId::SchemeC => "scheme_c",
            SchemeId::SchemeCThreeTier => "scheme_c_three_tier",
        }
    }
}

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemeId {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SchemeId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ScoringError::UnknownScheme(s.to_string()))
    }
}

/// Trait implemented by each scoring scheme.
pub trait Scheme: Send + Sync {
    fn id(&self) -> SchemeId;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// The rule table, in scoring order.
    fn questions(&self) -> &[Question];

    fn thresholds(&self) -> &Thresholds;

    fn question(&self, id: &str) -> Option<&Question> {
        self.questions().iter().find(|q| q.id == id)
    }

    fn classify(&self, score: f64) -> RiskLevel {
        self.thresholds().classify(score)
    }

    /// The closed label set of this scheme.
    fn levels(&self) -> Vec<RiskLevel> {
        self.thresholds().levels()
    }

    /// Check raw form answers, reporting every bad entry.
    fn validate_answers(&self, raw: &BTreeMap<String, String>) -> Vec<AnswerValidationError> {
        answers::validate(self.questions(), raw)
    }

    /// Map raw form answers onto this scheme's option sets.
    fn resolve_answers(
        &self,
        raw: &BTreeMap<String, String>,
    ) -> Result<answers::ResolvedAnswers<'_>, ScoringError> {
        answers::resolve(self.id(), self.questions(), raw)
    }

    /// Highest composite this scheme can produce.
    fn max_score(&self) -> f64 {
        self.questions()
            .iter()
            .map(|q| {
                q.options
                    .iter()
                    .map(|o| o.points)
                    .fold(0.0_f64, f64::max)
            })
            .sum()
    }
}

/// Return all registered schemes, oldest first.
pub fn all_schemes() -> Vec<Box<dyn Scheme>> {
    SchemeId::ALL.into_iter().map(get_scheme).collect()
}

pub fn get_scheme(id: SchemeId) -> Box<dyn Scheme> {
    match id {
        SchemeId::SchemeA => Box::new(schemes::scheme_a::AgeBmiRules),
        SchemeId::SchemeB => Box::new(schemes::scheme_b::AdditiveQuestionnaire),
        SchemeId::SchemeC => Box::new(schemes::scheme_c::WeightedQuestionnaire),
        SchemeId::SchemeCThreeTier => Box::new(schemes::scheme_c::WeightedThreeTier),
    }
}

/// Look up a scheme by its stored tag.
pub fn find_scheme(tag: &str) -> Result<Box<dyn Scheme>, ScoringError> {
    Ok(get_scheme(tag.parse()?))
}
