//! Height and weight normalization.
//!
//! Heights arrive in feet and inches from the intake form and are
//! converted to metres before BMI is derived. A BMI of `0.0` means
//! "unknown": it is what an absent height produces, and callers must not
//! read it as a literal body-mass index.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const METERS_PER_INCH: f64 = 0.0254;
pub const INCHES_PER_FOOT: u64 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DerivedFacts {
    pub height_meters: f64,
    /// Rounded to two decimals; `0.0` when unknown.
    pub bmi: f64,
}

impl DerivedFacts {
    pub fn bmi_known(&self) -> bool {
        self.bmi > 0.0
    }
}

pub fn height_meters(feet: Option<u32>, inches: Option<u32>) -> f64 {
    let total_inches =
        u64::from(feet.unwrap_or(0)) * INCHES_PER_FOOT + u64::from(inches.unwrap_or(0));
    if total_inches == 0 {
        return 0.0;
    }
    total_inches as f64 * METERS_PER_INCH
}

pub fn bmi(weight_kg: f64, height_meters: f64) -> f64 {
    if height_meters <= 0.0 || !weight_kg.is_finite() || weight_kg <= 0.0 {
        return 0.0;
    }
    round_to_cents(weight_kg / (height_meters * height_meters))
}

pub fn normalize(feet: Option<u32>, inches: Option<u32>, weight_kg: f64) -> DerivedFacts {
    let height_meters = height_meters(feet, inches);
    DerivedFacts {
        height_meters,
        bmi: bmi(weight_kg, height_meters),
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
