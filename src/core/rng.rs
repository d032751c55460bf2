//! Per-game random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Divergent by default**: Clock-seeded instances never share a stream
//!
//! ## Usage
//!
//! ```
//! use lumberjack_idle::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.gen_range_inclusive(1, 3);
//! assert!((1..=3).contains(&roll));
//!
//! // Same seed, same sequence
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.gen_range_inclusive(0, 1000), b.gen_range_inclusive(0, 1000));
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Instances created within the same clock tick still get distinct seeds.
static SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Random source owned by a single game.
///
/// Uses ChaCha8 for speed while keeping good statistical quality. Not shared
/// between games: every `Game` owns its own instance.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the high-resolution wall clock.
    ///
    /// The nanosecond timestamp is mixed with a process-wide counter so two
    /// games created back to back diverge even on coarse clocks.
    #[must_use]
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        let counter = SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self::new(nanos ^ counter.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in `[low, high]`.
    ///
    /// Callers validate the range up front (see `GameConfig::validate`).
    pub fn gen_range_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.inner.gen_range(low..=high)
    }

    /// Roll against a probability.
    ///
    /// Unlike `Rng::gen_bool` this accepts probabilities above 1.0 (always
    /// true) and below 0.0 (always false), which stacked golden axes produce.
    pub fn roll(&mut self, probability: f64) -> bool {
        self.inner.gen::<f64>() < probability
    }
}
