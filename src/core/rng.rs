//! Seeded randomness for deals and playouts.
//!
//! The deal is the only random event of a round, so a round is reproducible
//! from the seed its deal was drawn with. Playouts draw from their own
//! stream so they never disturb the deal.
//!
//! ```
//! use open_tarok::core::GameRng;
//!
//! let mut deck: Vec<u8> = (0..54).collect();
//! GameRng::new(7).for_context("deal").shuffle(&mut deck);
//!
//! let mut again: Vec<u8> = (0..54).collect();
//! GameRng::new(7).for_context("deal").shuffle(&mut again);
//!
//! assert_eq!(deck, again);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// ChaCha8 generator that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// A fresh seed from the thread RNG, for tables without a fixed seed.
    #[must_use]
    pub fn entropy_seed() -> u64 {
        rand::random()
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A generator for one purpose, derived from this generator's seed.
    ///
    /// Equal seeds and labels give equal streams; different labels give
    /// unrelated streams.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    /// A uniformly chosen element, `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    /// An index drawn in proportion to `weights`.
    ///
    /// Weights need not be normalised. `None` when no weight is positive.
    pub fn choose_weighted(&mut self, weights: &[f64]) -> Option<usize> {
        let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
        if total <= 0.0 {
            return None;
        }

        let mut remaining = self.inner.gen_range(0.0..total);
        for (i, &weight) in weights.iter().enumerate().filter(|(_, w)| **w > 0.0) {
            if remaining < weight {
                return Some(i);
            }
            remaining -= weight;
        }
        // Rounding can leave a sliver past the last weight.
        weights.iter().rposition(|&w| w > 0.0)
    }
}
