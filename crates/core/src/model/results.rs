use thiserror::Error;

/// Points awarded per correctly classified number.
pub const POINTS_PER_CORRECT: u32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResultsError {
    #[error("total ({total}) does not match correct + wrong ({sum})")]
    CountMismatch { total: u32, sum: u32 },
}

/// Outcome of a submitted game: how many placed numbers were classified
/// correctly and incorrectly.
///
/// Numbers left in the pool at submission are counted in neither bucket, so
/// `total` can be below the number of drawn questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResults {
    correct: u32,
    wrong: u32,
    total: u32,
}

impl GameResults {
    #[must_use]
    pub fn from_counts(correct: u32, wrong: u32) -> Self {
        Self {
            correct,
            wrong,
            total: correct + wrong,
        }
    }

    /// Rehydrate results from persisted or externally supplied counts.
    ///
    /// # Errors
    ///
    /// Returns `ResultsError::CountMismatch` if `total != correct + wrong`.
    pub fn from_persisted(correct: u32, wrong: u32, total: u32) -> Result<Self, ResultsError> {
        let sum = correct + wrong;
        if sum != total {
            return Err(ResultsError::CountMismatch { total, sum });
        }
        Ok(Self {
            correct,
            wrong,
            total,
        })
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Final score: ten points per correct classification.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.correct * POINTS_PER_CORRECT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_sum_of_correct_and_wrong() {
        let results = GameResults::from_counts(7, 3);
        assert_eq!(results.total(), 10);
        assert_eq!(results.score(), 70);
    }

    #[test]
    fn from_persisted_rejects_mismatched_total() {
        let err = GameResults::from_persisted(2, 2, 5).unwrap_err();
        assert_eq!(err, ResultsError::CountMismatch { total: 5, sum: 4 });
    }

    #[test]
    fn zero_correct_scores_zero() {
        assert_eq!(GameResults::from_counts(0, 4).score(), 0);
    }
}
