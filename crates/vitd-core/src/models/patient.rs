use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            "" => Err(CoreError::MissingField("gender".to_string())),
            other => Err(CoreError::invalid(
                "gender",
                format!("unrecognised value '{other}'"),
            )),
        }
    }
}

/// Comorbidities recorded on the intake form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Comorbidities {
    #[serde(default)]
    pub diabetes: bool,
    #[serde(default)]
    pub hypertension: bool,
    #[serde(default)]
    pub hypothyroidism: bool,
    #[serde(default)]
    pub hyperthyroidism: bool,
    /// Free-text "any other" entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

impl Comorbidities {
    /// Number of flagged comorbidities, counting a non-blank "other" as one.
    pub fn count(&self) -> usize {
        let flags = [
            self.diabetes,
            self.hypertension,
            self.hypothyroidism,
            self.hyperthyroidism,
        ];
        let other = self
            .other
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty());
        flags.iter().filter(|flag| **flag).count() + usize::from(other)
    }

    pub fn any(&self) -> bool {
        self.count() > 0
    }
}

/// The facts available at scoring time.
///
/// `answers` maps question ids (`q1`..`qN`) to option codes as captured by
/// the form. Codes are not checked here; the scoring crate maps them onto
/// the closed option set of the active scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientInput {
    pub age: u32,
    pub gender: Gender,
    #[serde(default)]
    pub height_feet: Option<u32>,
    #[serde(default)]
    pub height_inches: Option<u32>,
    pub weight_kg: f64,
    #[serde(default)]
    pub comorbidities: Comorbidities,
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
}

impl PatientInput {
    /// Check the fields the scoring formula treats as mandatory.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(CoreError::invalid(
                "age",
                format!("{} is outside [{MIN_AGE}, {MAX_AGE}]", self.age),
            ));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(CoreError::invalid(
                "weight_kg",
                format!("{} must be a positive number", self.weight_kg),
            ));
        }
        Ok(())
    }
}
