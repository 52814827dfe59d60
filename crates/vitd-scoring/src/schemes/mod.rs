//! Rule tables for every scheme that has been used in the field.
//!
//! Rows shared by several schemes are built here so that a weight change
//! shows up in exactly one place per scheme.

pub mod scheme_a;
pub mod scheme_b;
pub mod scheme_c;

use crate::rules::{
    AnswerOption, Band, DerivedFact, Question, RiskLevel, Section, Thresholds, UpperBound,
};

/// Low / Moderate / High cut used by schemes A and B.
pub(crate) fn low_moderate_high() -> Thresholds {
    Thresholds {
        bands: vec![
            Band {
                upper: UpperBound::AtMost(3.0),
                level: RiskLevel::Low,
            },
            Band {
                upper: UpperBound::AtMost(6.0),
                level: RiskLevel::Moderate,
            },
        ],
        otherwise: RiskLevel::High,
    }
}

/// The fixed Section A rules of schemes A and B.
pub(crate) fn section_a_rules() -> Vec<Question> {
    vec![
        Question::yes_no("age_over_50", "Age above 50 years", Section::A, 1.0)
            .derived(DerivedFact::AgeOver { years: 50 }),
        Question::yes_no("bmi_25_or_more", "BMI of 25 or more", Section::A, 1.0)
            .derived(DerivedFact::BmiAtLeast { bmi: 25.0 }),
    ]
}

pub(crate) fn time_outdoors(id: &str) -> Question {
    Question::choice(
        id,
        "Time Outdoors: On a typical day, how much time do you spend in the sun \
         (between 11 AM - 3 PM) with your face, arms, and legs fully exposed?",
        Section::B,
        vec![
            AnswerOption::new("more_30", "More than 30 minutes", 0.0).with_aliases(&["option1"]),
            AnswerOption::new("less_30", "Less than 30 minutes", 2.0).with_aliases(&["option2"]),
            AnswerOption::new("negligible", "Negligible", 3.0).with_aliases(&["option3"]),
        ],
    )
}

pub(crate) fn clothing(id: &str) -> Question {
    Question::choice(
        id,
        "Clothing Style: What is your typical style of clothing when outdoors?",
        Section::B,
        vec![
            AnswerOption::new("shorts", "Shorts, t-shirts, skirts", 0.0)
                .with_aliases(&["option1", "minimal"]),
            AnswerOption::new(
                "partial",
                "Partial coverage (e.g. Saree, half-sleeve salwar)",
                1.0,
            )
            .with_aliases(&["option2"]),
            AnswerOption::new(
                "full",
                "Full coverage (e.g. Burqa, full-sleeve clothes)",
                3.0,
            )
            .with_aliases(&["option3"]),
        ],
    )
}

pub(crate) fn skin_tone(id: &str) -> Question {
    Question::choice(
        id,
        "Skin Pigmentation: Which best describes your skin tone?",
        Section::B,
        vec![
            AnswerOption::new("dark", "Dark", 0.0).with_aliases(&["option1"]),
            AnswerOption::new("wheatish", "Wheatish", 0.25).with_aliases(&["option2"]),
            AnswerOption::new("fair", "Fair", 0.75).with_aliases(&["option3"]),
            AnswerOption::new("very_fair", "Very fair", 1.0)
                .with_aliases(&["option4"]),
        ],
    )
}

pub(crate) fn yes_no(id: &str, text: &str, yes_points: f64) -> Question {
    Question::yes_no(id, text, Section::B, yes_points)
}
