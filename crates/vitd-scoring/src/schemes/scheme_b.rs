use crate::rules::{Question, Thresholds};
use crate::schemes::{clothing, low_moderate_high, section_a_rules, skin_tone, time_outdoors, yes_no};
use crate::{Scheme, SchemeId};

/// Scheme B: Section A rules plus a 12-question additive questionnaire.
/// Two tiered exposure questions, one four-tier pigmentation question,
/// and nine yes/no questions worth one point each.
pub struct AdditiveQuestionnaire;

impl Scheme for AdditiveQuestionnaire {
    fn id(&self) -> SchemeId {
        SchemeId::SchemeB
    }

    fn name(&self) -> &str {
        "12-question additive questionnaire"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let mut questions = section_a_rules();
            questions.extend([
                time_outdoors("q1"),
                clothing("q2"),
                yes_no(
                    "q3",
                    "Use of Sunscreen: Do you regularly apply sunscreen (SPF >15) on exposed skin before going out?",
                    1.0,
                ),
                yes_no(
                    "q4",
                    "Location & Pollution: Do you live in a highly polluted urban area or a region with dense fog/smog?",
                    1.0,
                ),
                yes_no(
                    "q5",
                    "Animal-based foods: No intake (strict vegetarian/vegan; no eggs, no fish)?",
                    1.0,
                ),
                yes_no(
                    "q6",
                    "Milk/Fortified Food: Do you consume less than 2 cups of dairy/dairy products per day?",
                    1.0,
                ),
                yes_no(
                    "q7",
                    "Do you consume egg yolks or fatty fish less than once per week?",
                    1.0,
                ),
                skin_tone("q8"),
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
                    "Symptoms: Do you often experience bone/lower back pain, muscle weakness, or fatigue?",
                    1.0,
                ),
            ]);
            questions
        });
        &QUESTIONS
    }

    fn thresholds(&self) -> &Thresholds {
        static THRESHOLDS: std::sync::LazyLock<Thresholds> =
            std::sync::LazyLock::new(low_moderate_high);
        &THRESHOLDS
    }
}
