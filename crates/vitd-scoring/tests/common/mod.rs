#![allow(dead_code)]

use std::collections::BTreeMap;

use vitd_core::models::patient::{Comorbidities, Gender, PatientInput};

/// 5 ft 4 in, which is 1.6256 m.
pub const FEET: u32 = 5;
pub const INCHES: u32 = 4;

pub fn patient(age: u32, weight_kg: f64, answers: &[(&str, &str)]) -> PatientInput {
    PatientInput {
        age,
        gender: Gender::Female,
        height_feet: Some(FEET),
        height_inches: Some(INCHES),
        weight_kg,
        comorbidities: Comorbidities::default(),
        answers: answers_map(answers),
    }
}

pub fn answers_map(answers: &[(&str, &str)]) -> BTreeMap<String, String> {
    answers
        .iter()
        .map(|(q, a)| (q.to_string(), a.to_string()))
        .collect()
}

/// Every scheme C question answered with its zero-point option.
pub fn scheme_c_baseline() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q1", "no"),
        ("q2", "no"),
        ("q3", "dark"),
        ("q4", "shorts"),
        ("q5", "more_30"),
        ("q6", "no"),
        ("q7", "no"),
        ("q8", "regular"),
        ("q9", "no"),
        ("q10", "no"),
        ("q11", "no"),
        ("q12", "no"),
        ("q13", "no"),
        ("q14", "no"),
        ("q15", "no"),
        ("q16", "no"),
        ("q17", "no"),
        ("q18", "no"),
    ]
}

pub fn with(
    mut base: Vec<(&'static str, &'static str)>,
    overrides: &[(&'static str, &'static str)],
) -> Vec<(&'static str, &'static str)> {
    for &(question, answer) in overrides {
        match base.iter_mut().find(|entry| entry.0 == question) {
            Some(entry) => entry.1 = answer,
            None => base.push((question, answer)),
        }
    }
    base
}
