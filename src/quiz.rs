//! Quiz mode: pick one unseen question at random.

use crate::domain::Question;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::Mutex;

/// Category marker sent by clients when the quiz spans all categories.
pub const ALL_CATEGORIES_MARKER: &str = "click";

/// Source of random indices for the quiz picker.
///
/// `pick_index(len)` is only called with `len > 0` and must return a value in `0..len`.
pub trait RandomSource: Send + Sync + fmt::Debug {
    fn pick_index(&self, len: usize) -> usize;
}

/// Process-wide thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic generator for reproducible runs.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}

/// Which questions a quiz round draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

impl QuizScope {
    pub fn category(&self) -> Option<i64> {
        match self {
            QuizScope::All => None,
            QuizScope::Category(id) => Some(*id),
        }
    }
}

/// Choose one candidate uniformly. `None` means the quiz is complete.
pub fn pick_next_question(candidates: Vec<Question>, random: &dyn RandomSource) -> Option<Question> {
    if candidates.is_empty() {
        return None;
    }
    let index = random.pick_index(candidates.len());
    candidates.into_iter().nth(index)
}
