use crate::rules::{Question, Thresholds};
use crate::schemes::{low_moderate_high, section_a_rules};
use crate::{Scheme, SchemeId};

/// Scheme A: the first field version. Age above 50 and BMI of 25 or more
/// each add one point; the questionnaire section was not yet scored.
pub struct AgeBmiRules;

impl Scheme for AgeBmiRules {
    fn id(&self) -> SchemeId {
        SchemeId::SchemeA
    }

    fn name(&self) -> &str {
        "Age/BMI rules"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> =
            std::sync::LazyLock::new(section_a_rules);
        &QUESTIONS
    }

    fn thresholds(&self) -> &Thresholds {
        static THRESHOLDS: std::sync::LazyLock<Thresholds> =
            std::sync::LazyLock::new(low_moderate_high);
        &THRESHOLDS
    }
}
