use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use vitd_core::models::patient::PatientInput;

use crate::anthropometry::DerivedFacts;
use crate::error::ScoringError;

/// Historical grouping of rules: Section A held the fixed anthropometric
/// rules, Section B the questionnaire proper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Section {
    A,
    B,
}

/// A patient fact a yes/no rule can be answered from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum DerivedFact {
    /// Age strictly greater than `years`.
    AgeOver { years: u32 },
    /// BMI at or above `bmi`. Never holds when BMI is unknown.
    BmiAtLeast { bmi: f64 },
    /// Any comorbidity flag set, or a non-blank "other".
    AnyComorbidity,
}

impl DerivedFact {
    pub fn holds(&self, input: &PatientInput, facts: &DerivedFacts) -> bool {
        match *self {
            DerivedFact::AgeOver { years } => input.age > years,
            DerivedFact::BmiAtLeast { bmi } => facts.bmi_known() && facts.bmi >= bmi,
            DerivedFact::AnyComorbidity => input.comorbidities.any(),
        }
    }
}

/// One selectable answer and the points it contributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub code: String,
    pub label: String,
    pub points: f64,
    /// Other spellings accepted at the input boundary (legacy UI codes).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl AnswerOption {
    pub fn new(code: &str, label: &str, points: f64) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
            points,
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|alias| alias.to_string()).collect();
        self
    }

    /// Case-insensitive match against the code, label, or any alias.
    pub fn matches(&self, raw: &str) -> bool {
        let raw = raw.trim();
        self.code.eq_ignore_ascii_case(raw)
            || self.label.eq_ignore_ascii_case(raw)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(raw))
    }
}

/// A row of a scheme's rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub section: Section,
    pub options: Vec<AnswerOption>,
    /// Set for fixed yes/no rules always resolved from patient facts.
    pub derived_from: Option<DerivedFact>,
    /// Set for asked yes/no questions answered from patient facts only
    /// when the form leaves them blank.
    #[serde(default)]
    pub prefill_from: Option<DerivedFact>,
}

impl Question {
    pub fn choice(id: &str, text: &str, section: Section, options: Vec<AnswerOption>) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            section,
            options,
            derived_from: None,
            prefill_from: None,
        }
    }

    /// A yes/no question where "yes" is worth `yes_points`.
    pub fn yes_no(id: &str, text: &str, section: Section, yes_points: f64) -> Self {
        Self::choice(
            id,
            text,
            section,
            vec![
                AnswerOption::new("yes", "Yes", yes_points).with_aliases(&["y", "true"]),
                AnswerOption::new("no", "No", 0.0).with_aliases(&["n", "false"]),
            ],
        )
    }

    pub fn derived(mut self, fact: DerivedFact) -> Self {
        self.derived_from = Some(fact);
        self
    }

    pub fn prefilled(mut self, fact: DerivedFact) -> Self {
        self.prefill_from = Some(fact);
        self
    }

    /// Map a raw form value onto this question's closed option set.
    pub fn option(&self, raw: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.matches(raw))
    }

    /// The "yes" or "no" option of a yes/no rule.
    pub fn yes_no_option(&self, yes: bool) -> Option<&AnswerOption> {
        let code = if yes { "yes" } else { "no" };
        self.options.iter().find(|option| option.code == code)
    }

    pub fn codes(&self) -> Vec<String> {
        self.options.iter().map(|option| option.code.clone()).collect()
    }
}

/// Discrete classification label. Serialized as the stored `risk_level`
/// text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum RiskLevel {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Moderate Risk")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
    Adequate,
    Inadequate,
    Sufficient,
    Insufficient,
    Deficient,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 8] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::Adequate,
        RiskLevel::Inadequate,
        RiskLevel::Sufficient,
        RiskLevel::Insufficient,
        RiskLevel::Deficient,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::Adequate => "Adequate",
            RiskLevel::Inadequate => "Inadequate",
            RiskLevel::Sufficient => "Sufficient",
            RiskLevel::Insufficient => "Insufficient",
            RiskLevel::Deficient => "Deficient",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        RiskLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ScoringError::UnknownRiskLevel(s.to_string()))
    }
}

/// Upper edge of a classification band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum UpperBound {
    /// Scores strictly below the value.
    Below(f64),
    /// Scores at or below the value.
    AtMost(f64),
}

impl UpperBound {
    pub fn admits(&self, score: f64) -> bool {
        match *self {
            UpperBound::Below(limit) => score < limit,
            UpperBound::AtMost(limit) => score <= limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub upper: UpperBound,
    pub level: RiskLevel,
}

/// Ordered classification bands; scores above every band get `otherwise`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Thresholds {
    pub bands: Vec<Band>,
    pub otherwise: RiskLevel,
}

impl Thresholds {
    pub fn classify(&self, score: f64) -> RiskLevel {
        self.bands
            .iter()
            .find(|band| band.upper.admits(score))
            .map_or(self.otherwise, |band| band.level)
    }

    /// Every label this table can produce, lowest band first.
    pub fn levels(&self) -> Vec<RiskLevel> {
        self.bands
            .iter()
            .map(|band| band.level)
            .chain(std::iter::once(self.otherwise))
            .collect()
    }
}
