use std::sync::Mutex;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Randomness seam for ordering multiple-choice answers.
pub trait AnswerShuffler: Send + Sync {
    fn shuffle(&self, answers: &mut [(bool, String)]);
}

/// Thread-local RNG; no reproducibility.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomShuffler;

impl AnswerShuffler for RandomShuffler {
    fn shuffle(&self, answers: &mut [(bool, String)]) {
        answers.shuffle(&mut rand::rng());
    }
}

/// Reproducible shuffling from a fixed seed.
#[derive(Debug)]
pub struct SeededShuffler {
    rng: Mutex<StdRng>,
}

impl SeededShuffler {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl AnswerShuffler for SeededShuffler {
    fn shuffle(&self, answers: &mut [(bool, String)]) {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        answers.shuffle(&mut *rng);
    }
}

/// Leaves answers in provider order (incorrect answers first, correct last).
#[derive(Debug, Default, Clone, Copy)]
pub struct KeepOrder;

impl AnswerShuffler for KeepOrder {
    fn shuffle(&self, _answers: &mut [(bool, String)]) {}
}
