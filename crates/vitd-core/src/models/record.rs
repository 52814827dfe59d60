use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::patient::{Comorbidities, Gender, PatientInput};
use crate::error::CoreError;

/// A stored patient row as the persistence layer hands it over.
///
/// Field names match the `patients` table. Everything the form may leave
/// blank is optional so partially captured rows still deserialize; the
/// mandatory ones are enforced by [`PatientRecord::to_input`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientRecord {
    pub id: Uuid,
    pub camp_id: Uuid,
    pub patient_number: u32,
    pub initials: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub height_feet: Option<u32>,
    #[serde(default)]
    pub height_inches: Option<u32>,
    #[serde(default)]
    pub height_meters: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub bmi: Option<f64>,
    #[serde(default)]
    pub diabetes: Option<bool>,
    #[serde(default)]
    pub hypertension: Option<bool>,
    #[serde(default)]
    pub hypothyroidism: Option<bool>,
    #[serde(default)]
    pub hyperthyroidism: Option<bool>,
    #[serde(default)]
    pub other_comorbidity: Option<String>,
    #[serde(default)]
    pub questionnaire_responses: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub section_a_score: Option<f64>,
    #[serde(default)]
    pub section_b_score: Option<f64>,
    #[serde(default)]
    pub total_score: Option<f64>,
    #[serde(default)]
    pub risk_level: Option<String>,
    /// Scheme the row was scored under. Older rows may lack it.
    #[serde(default)]
    pub scheme_id: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl PatientRecord {
    /// A fresh, unscored row for `camp_id`.
    pub fn new(camp_id: Uuid, patient_number: u32, initials: impl Into<String>) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            camp_id,
            patient_number,
            initials: initials.into(),
            age: None,
            gender: None,
            height_feet: None,
            height_inches: None,
            height_meters: None,
            weight_kg: None,
            bmi: None,
            diabetes: None,
            hypertension: None,
            hypothyroidism: None,
            hyperthyroidism: None,
            other_comorbidity: None,
            questionnaire_responses: None,
            section_a_score: None,
            section_b_score: None,
            total_score: None,
            risk_level: None,
            scheme_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Copy the intake fields of `input` onto this row.
    pub fn set_input(&mut self, input: &PatientInput) {
        self.age = Some(input.age);
        self.gender = Some(input.gender.to_string());
        self.height_feet = input.height_feet;
        self.height_inches = input.height_inches;
        self.weight_kg = Some(input.weight_kg);
        self.diabetes = Some(input.comorbidities.diabetes);
        self.hypertension = Some(input.comorbidities.hypertension);
        self.hypothyroidism = Some(input.comorbidities.hypothyroidism);
        self.hyperthyroidism = Some(input.comorbidities.hyperthyroidism);
        self.other_comorbidity = input.comorbidities.other.clone();
        self.questionnaire_responses = Some(input.answers.clone());
        self.updated_at = jiff::Timestamp::now();
    }

    pub fn comorbidities(&self) -> Comorbidities {
        Comorbidities {
            diabetes: self.diabetes.unwrap_or(false),
            hypertension: self.hypertension.unwrap_or(false),
            hypothyroidism: self.hypothyroidism.unwrap_or(false),
            hyperthyroidism: self.hyperthyroidism.unwrap_or(false),
            other: self.other_comorbidity.clone(),
        }
    }

    /// Rebuild the scoring input from the stored row.
    ///
    /// Age, gender and weight are never defaulted: a row missing any of
    /// them is rejected with the name of the missing column.
    pub fn to_input(&self) -> Result<PatientInput, CoreError> {
        let age = self
            .age
            .ok_or_else(|| CoreError::MissingField("age".to_string()))?;
        let gender: Gender = self
            .gender
            .as_deref()
            .ok_or_else(|| CoreError::MissingField("gender".to_string()))?
            .parse()?;
        let weight_kg = self
            .weight_kg
            .ok_or_else(|| CoreError::MissingField("weight_kg".to_string()))?;

        let input = PatientInput {
            age,
            gender,
            height_feet: self.height_feet,
            height_inches: self.height_inches,
            weight_kg,
            comorbidities: self.comorbidities(),
            answers: self.questionnaire_responses.clone().unwrap_or_default(),
        };
        input.validate()?;
        Ok(input)
    }

    pub fn is_scored(&self) -> bool {
        self.total_score.is_some() && self.risk_level.is_some()
    }
}
