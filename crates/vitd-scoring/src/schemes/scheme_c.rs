use crate::rules::{
    AnswerOption, Band, DerivedFact, Question, RiskLevel, Section, Thresholds, UpperBound,
};
use crate::schemes::{clothing, skin_tone, time_outdoors, yes_no};
use crate::{Scheme, SchemeId};

/// Composite at or above which a patient is classed Inadequate.
pub const INADEQUATE_FROM: f64 = 5.0;

/// Scheme C: the 18-question weighted questionnaire.
///
/// Age, BMI and comorbidity are ordinary yes/no questions here. A blank
/// answer is filled in from the patient's facts. Recent supplementation subtracts five points, so the composite
/// is floored at zero. Below 5 is Adequate, 5 and above Inadequate.
pub struct WeightedQuestionnaire;

impl Scheme for WeightedQuestionnaire {
    fn id(&self) -> SchemeId {
        SchemeId::SchemeC
    }

    fn name(&self) -> &str {
        "18-question weighted questionnaire"
    }

    fn questions(&self) -> &[Question] {
        weighted_questions()
    }

    fn thresholds(&self) -> &Thresholds {
        static THRESHOLDS: std::sync::LazyLock<Thresholds> = std::sync::LazyLock::new(|| {
            Thresholds {
                bands: vec![Band {
                    upper: UpperBound::Below(INADEQUATE_FROM),
                    level: RiskLevel::Adequate,
                }],
                otherwise: RiskLevel::Inadequate,
            }
        });
        &THRESHOLDS
    }
}

/// Scheme C rules with the Sufficient / Insufficient / Deficient cut that
/// an earlier revision of the summary used. Kept for replaying records
/// classified under it.
pub struct WeightedThreeTier;

impl Scheme for WeightedThreeTier {
    fn id(&self) -> SchemeId {
        SchemeId::SchemeCThreeTier
    }

    fn name(&self) -> &str {
        "18-question weighted questionnaire (three-tier)"
    }

    fn questions(&self) -> &[Question] {
        weighted_questions()
    }

    fn thresholds(&self) -> &Thresholds {
        static THRESHOLDS: std::sync::LazyLock<Thresholds> = std::sync::LazyLock::new(|| {
            Thresholds {
                bands: vec![
                    Band {
                        upper: UpperBound::Below(5.0),
                        level: RiskLevel::Sufficient,
                    },
                    Band {
                        upper: UpperBound::AtMost(7.75),
                        level: RiskLevel::Insufficient,
                    },
                ],
                otherwise: RiskLevel::Deficient,
            }
        });
        &THRESHOLDS
    }
}

fn weighted_questions() -> &'static [Question] {
    static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
        let mut questions = vec![
            yes_no("q1", "Is the patient older than 50 years?", 0.5)
                .prefilled(DerivedFact::AgeOver { years: 50 }),
            yes_no("q2", "Is the patient's BMI 30 or more?", 1.0)
                .prefilled(DerivedFact::BmiAtLeast { bmi: 30.0 }),
            skin_tone("q3"),
            clothing("q4"),
            time_outdoors("q5"),
            yes_no(
                "q6",
                "Use of Sunscreen: Do you regularly apply sunscreen (SPF >15) on exposed skin before going out?",
                1.0,
            ),
            yes_no(
                "q7",
                "Location & Pollution: Do you live in a highly polluted urban area or a region with dense fog/smog?",
                1.0,
            ),
            Question::choice(
                "q8",
                "Animal-based foods: How often do you eat eggs, fish, or meat?",
                Section::B,
                vec![
                    AnswerOption::new("no_intake", "No intake", 1.0).with_aliases(&["option1"]),
                    AnswerOption::new("occasional", "Occasionally", 0.5).with_aliases(&["option2"]),
                    AnswerOption::new("regular", "Regularly", 0.0).with_aliases(&["option3"]),
                ],
            ),
            yes_no(
                "q9",
                "Malabsorption Conditions: Do you have liver disease, IBD, Celiac disease, or Cystic Fibrosis?",
                1.0,
            ),
            yes_no(
                "q10",
                "Medications: Are you on long-term medication (Phenytoin, steroids, antifungals, antiretroviral)?",
                1.0,
            ),
            yes_no(
                "q11",
                "Osteoporosis: Have you been diagnosed with osteoporosis or experienced a low-trauma fracture?",
                1.0,
            ),
            yes_no(
                "q12",
                "Does the patient have any recorded comorbidity?",
                1.0,
            )
            .prefilled(DerivedFact::AnyComorbidity),
        ];

        let symptoms = [
            ("q13", "Do you experience bone or lower back pain?"),
            ("q14", "Do you experience muscle weakness?"),
            ("q15", "Do you feel fatigued or tired?"),
            ("q16", "Do you fall ill frequently?"),
            ("q17", "Do you have low mood or trouble concentrating?"),
        ];
        questions.extend(symptoms.iter().map(|(id, text)| symptom(id, text)));

        questions.push(yes_no(
            "q18",
            "Supplementation: Are you taking, or have you taken in the last 3 months, Vitamin D or calcium supplements?",
            -5.0,
        ));
        questions
    });
    &QUESTIONS
}

fn symptom(id: &str, text: &str) -> Question {
    Question::choice(
        id,
        text,
        Section::B,
        vec![
            AnswerOption::new("no", "No", 0.0).with_aliases(&["never", "option1"]),
            AnswerOption::new("sometimes", "Sometimes", 0.25).with_aliases(&["option2"]),
            AnswerOption::new("often", "Often", 0.5).with_aliases(&["option3"]),
        ],
    )
}
