use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::CategoryId;

/// A single quiz item: a numeric expression and the category it belongs to.
///
/// The expression string doubles as the item's unique identifier within a
/// session (the bank rejects duplicates).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    number: String,
    correct_category: CategoryId,
}

impl Question {
    #[must_use]
    pub fn new(number: impl Into<String>, correct_category: CategoryId) -> Self {
        Self {
            number: number.into(),
            correct_category,
        }
    }

    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    #[must_use]
    pub fn correct_category(&self) -> CategoryId {
        self.correct_category
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,

    #[error("duplicate number in question bank: {number}")]
    DuplicateNumber { number: String },
}

/// Read-only bank of questions, injected at startup.
///
/// Guarantees that every `number` string appears at most once, so a number
/// can safely be used as a session-scoped identifier.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from a list of questions.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` for an empty list and
    /// `BankError::DuplicateNumber` if two questions share a `number`.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.number()) {
                return Err(BankError::DuplicateNumber {
                    number: question.number().to_string(),
                });
            }
        }
        Ok(Self { questions })
    }

    /// Look up a question by its number identifier.
    #[must_use]
    pub fn get(&self, number: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.number() == number)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_rejects_duplicates() {
        let result = QuestionBank::new(vec![
            Question::new("π", CategoryId::Irrational),
            Question::new("π", CategoryId::Rational),
        ]);
        assert_eq!(
            result.unwrap_err(),
            BankError::DuplicateNumber {
                number: "π".to_string()
            }
        );
    }

    #[test]
    fn bank_rejects_empty_list() {
        assert_eq!(QuestionBank::new(vec![]).unwrap_err(), BankError::Empty);
    }

    #[test]
    fn bank_lookup_by_number() {
        let bank = QuestionBank::new(vec![
            Question::new("2i", CategoryId::Imaginary),
            Question::new("1/2", CategoryId::Rational),
        ])
        .unwrap();
        assert_eq!(
            bank.get("2i").unwrap().correct_category(),
            CategoryId::Imaginary
        );
        assert!(bank.get("3i").is_none());
    }
}
