use quiz_core::model::Question;
use rand::Rng;

/// Draw `count` distinct questions from the bank via an unbiased
/// Fisher-Yates shuffle, then take the head of the permutation.
///
/// Returns the whole (shuffled) bank when it holds fewer than `count` items.
pub fn draw_questions<R: Rng + ?Sized>(
    bank: &[Question],
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    let mut shuffled = bank.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled.truncate(count.min(bank.len()));
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::data::question_bank;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn draw_is_a_permutation_subset_of_the_bank() {
        let bank = question_bank().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let drawn = draw_questions(bank.questions(), 20, &mut rng);
        assert_eq!(drawn.len(), 20);

        let numbers: HashSet<&str> = drawn.iter().map(|q| q.number()).collect();
        assert_eq!(numbers.len(), 20, "duplicate question drawn");
        for question in &drawn {
            assert!(bank.get(question.number()).is_some());
        }
    }

    #[test]
    fn draw_from_small_bank_returns_everything() {
        let bank = question_bank().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let drawn = draw_questions(&bank.questions()[..5], 20, &mut rng);
        assert_eq!(drawn.len(), 5);
    }

    #[test]
    fn draw_frequencies_are_roughly_uniform() {
        let bank = question_bank().unwrap();
        let items = bank.questions();

        let mut hits: HashMap<String, u32> = HashMap::new();
        let rounds = 2_000;
        for seed in 0..rounds {
            let mut rng = StdRng::seed_from_u64(seed);
            for question in draw_questions(items, 20, &mut rng) {
                *hits.entry(question.number().to_string()).or_default() += 1;
            }
        }

        // Each of the 36 items should land in a 20-draw about 20/36 of the
        // time. Allow a generous band; this guards against gross bias, not
        // statistical perfection.
        let expected = rounds * 20 / 36;
        for question in items {
            let count = u64::from(hits.get(question.number()).copied().unwrap_or(0));
            assert!(
                count > expected * 8 / 10 && count < expected * 12 / 10,
                "item {} drawn {count} times, expected about {expected}",
                question.number()
            );
        }
    }
}
