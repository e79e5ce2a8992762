//! Seeded random source.
//!
//! Every draw consumes one sequential stream. ChaCha8 keeps the stream
//! identical across platforms for a given seed.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable pseudo-random generator for shuffles and sampling.
///
/// # Example
///
/// ```
/// use teamdraw_solver::DrawRng;
///
/// let mut a = DrawRng::new(42);
/// let mut b = DrawRng::new(42);
/// let mut xs = vec![1, 2, 3, 4, 5];
/// let mut ys = xs.clone();
/// a.shuffle(&mut xs);
/// b.shuffle(&mut ys);
/// assert_eq!(xs, ys);
/// assert_eq!(a.seed(), 42);
/// ```
#[derive(Debug, Clone)]
pub struct DrawRng {
    seed: u64,
    rng: ChaCha8Rng,
}

impl DrawRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uses `seed` when given, a time-derived seed otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        Self::new(seed.unwrap_or_else(time_seed))
    }

    /// The seed this stream was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// `amount` distinct indices from `0..length` in random order.
    ///
    /// `amount` is clamped to `length`.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, length, amount.min(length)).into_vec()
    }

    /// Uniform value in `0..bound`; 0 when `bound` is 0.
    pub fn offset(&mut self, bound: usize) -> usize {
        if bound == 0 {
            0
        } else {
            self.rng.random_range(0..bound)
        }
    }
}

/// Milliseconds since the epoch, folded into 32 bits.
pub fn time_seed() -> u64 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    (millis % u128::from(u32::MAX)) as u64
}
