//! Mapping of raw form answers onto a scheme's closed option sets.
//!
//! This is the only place free-form strings are looked at. Everything
//! past [`resolve`] works with [`AnswerOption`] references, so a typo in a
//! stored code fails here instead of silently scoring zero.

use std::collections::BTreeMap;

use crate::error::{AnswerValidationError, ScoringError};
use crate::rules::{AnswerOption, Question};
use crate::SchemeId;

/// Answers checked against a rule table, keyed by question id.
#[derive(Debug, Clone, Default)]
pub struct ResolvedAnswers<'a> {
    by_question: BTreeMap<&'a str, &'a AnswerOption>,
}

impl<'a> ResolvedAnswers<'a> {
    pub fn get(&self, question_id: &str) -> Option<&'a AnswerOption> {
        self.by_question.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_question.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_question.is_empty()
    }
}

/// Resolve every answer, failing on the first unknown question or code.
///
/// Blank values count as unanswered.
pub fn resolve<'a>(
    scheme_id: SchemeId,
    questions: &'a [Question],
    raw: &BTreeMap<String, String>,
) -> Result<ResolvedAnswers<'a>, ScoringError> {
    let mut by_question = BTreeMap::new();
    for (question_id, value) in raw {
        let question = questions
            .iter()
            .find(|q| q.id == *question_id)
            .ok_or_else(|| ScoringError::UnknownQuestion {
                scheme_id: scheme_id.to_string(),
                question_id: question_id.clone(),
            })?;
        if value.trim().is_empty() {
            continue;
        }
        let option = question
            .option(value)
            .ok_or_else(|| unknown_option(question, value))?;
        by_question.insert(question.id.as_str(), option);
    }
    Ok(ResolvedAnswers { by_question })
}

/// Collect every problem with `raw` instead of stopping at the first.
pub fn validate(questions: &[Question], raw: &BTreeMap<String, String>) -> Vec<AnswerValidationError> {
    let mut errors = Vec::new();
    for (question_id, value) in raw {
        match questions.iter().find(|q| q.id == *question_id) {
            None => errors.push(AnswerValidationError {
                question_id: question_id.clone(),
                value: value.clone(),
                expected: Vec::new(),
                message: format!("unknown question '{question_id}'"),
            }),
            Some(question) if !value.trim().is_empty() && question.option(value).is_none() => {
                errors.push(unknown_option(question, value));
            }
            Some(_) => {}
        }
    }
    errors
}

fn unknown_option(question: &Question, value: &str) -> AnswerValidationError {
    let expected = question.codes();
    AnswerValidationError {
        question_id: question.id.clone(),
        value: value.to_string(),
        message: format!(
            "{}: '{}' is not one of [{}]",
            question.id,
            value,
            expected.join(", "),
        ),
        expected,
    }
}
