//! Static quiz content: the question bank and the category registry.
//!
//! Supplied to the session layer at startup as plain collections, so the
//! engine can be pointed at different content without touching game logic.

use crate::model::{BankError, Category, CategoryId, Question, QuestionBank};

/// The built-in bank of 36 numeric expressions.
///
/// # Errors
///
/// Never fails for the built-in data; the `Result` only reflects the
/// `QuestionBank` constructor contract.
pub fn question_bank() -> Result<QuestionBank, BankError> {
    use CategoryId::{Complex, Imaginary, Integer, Irrational, Natural, Rational, Whole};

    let questions = vec![
        // Complex
        Question::new("3 + 4i", Complex),
        Question::new("-2 + 5i", Complex),
        Question::new("1 - 3i", Complex),
        Question::new("-4 - 2i", Complex),
        Question::new("-1 + 6i", Complex),
        Question::new("5 - 4i", Complex),
        // Imaginary
        Question::new("2i", Imaginary),
        Question::new("-3i", Imaginary),
        Question::new("5i", Imaginary),
        Question::new("-7i", Imaginary),
        Question::new("4i", Imaginary),
        Question::new("-6i", Imaginary),
        // Rational
        Question::new("1/2", Rational),
        Question::new("-3/4", Rational),
        Question::new("-5/6", Rational),
        Question::new("√0.09", Rational),
        Question::new("-9/10", Rational),
        Question::new("-13/14", Rational),
        // Irrational
        Question::new("π", Irrational),
        Question::new("√2", Irrational),
        Question::new("√5", Irrational),
        Question::new("√23", Irrational),
        Question::new("e", Irrational),
        Question::new("2π", Irrational),
        // Integers
        Question::new("-10", Integer),
        Question::new("-8", Integer),
        Question::new("-6", Integer),
        Question::new("-4", Integer),
        Question::new("-2", Integer),
        Question::new("-√36", Integer),
        // Whole
        Question::new("0", Whole),
        // Natural
        Question::new("1", Natural),
        Question::new("21", Natural),
        Question::new("9", Natural),
        Question::new("101", Natural),
        Question::new("12", Natural),
        Question::new("√25", Natural),
    ];

    QuestionBank::new(questions)
}

/// The seven category descriptions shown to the player.
#[must_use]
pub fn category_registry() -> Vec<Category> {
    vec![
        Category::new(
            CategoryId::Complex,
            "Complex Numbers",
            "Numbers in the form a + bi, where a and b are real numbers and i is the imaginary unit",
        ),
        Category::new(
            CategoryId::Imaginary,
            "Imaginary Numbers",
            "Numbers in the form bi, where b is a real number and i is the imaginary unit",
        ),
        Category::new(
            CategoryId::Irrational,
            "Irrational Numbers",
            "Numbers that cannot be expressed as a ratio of two integers",
        ),
        Category::new(
            CategoryId::Rational,
            "Rational Numbers",
            "Numbers that can be expressed as a ratio of two integers",
        ),
        Category::new(
            CategoryId::Integer,
            "Integers",
            "Whole numbers and their negatives (...-2, -1, 0, 1, 2...)",
        ),
        Category::new(
            CategoryId::Whole,
            "Whole Numbers",
            "Non-negative integers (0, 1, 2, 3, ...)",
        ),
        Category::new(
            CategoryId::Natural,
            "Natural Numbers",
            "Positive integers (1, 2, 3, ...)",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_bank_is_valid_and_sized() {
        let bank = question_bank().unwrap();
        assert_eq!(bank.len(), 36);
        assert_eq!(
            bank.get("-√36").unwrap().correct_category(),
            CategoryId::Integer
        );
    }

    #[test]
    fn registry_covers_every_category() {
        let categories = category_registry();
        assert_eq!(categories.len(), CategoryId::ALL.len());
        for id in CategoryId::ALL {
            assert!(categories.iter().any(|c| c.id() == id), "missing {id}");
        }
    }
}
