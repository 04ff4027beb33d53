//! Park–Miller "Minimal Standard" Pseudo-Random Number Generator
//!
//! # Purpose
//! Provides the classic multiplicative congruential generator published by
//! Park and Miller (1988), plus a thin layer of derived draws (uniform floats,
//! bounded integers, bounded floats, booleans and order-insensitive ranges).
//!
//! # Project Context
//! The minimal standard generator is the reference LCG that many toolchains
//! ship (C++ `minstd_rand0`, several game engines, LevelDB's test RNG). It is
//! used here where:
//! - Bit-exact reproducibility against other minimal standard implementations matters
//! - A whole generator state must fit in one 32-bit seed
//! - Cryptographic security is NOT required
//!
//! # ⚠️ CRITICAL LIMITATIONS ⚠️
//! - **NOT cryptographically secure** - NEVER use for security purposes
//! - **NOT suitable for** passwords, tokens, keys, nonces, or any security-sensitive randomness
//! - **Limited statistical quality** - 31-bit outputs, fails modern test batteries
//! - **Predictable** - One observed output reveals every later output
//! - **Single stream** - There is no stream selector; one seed is one sequence
//!
//! # Algorithm: Multiplicative Linear Congruential Generator
//! Uses the recurrence relation: `seed = (a × seed) mod m`
//! - Multiplier (a): 16807 (7^5, a primitive root modulo m)
//! - Modulus (m): 2^31 - 1 = 2147483647 (a Mersenne prime)
//! - No increment, so the state can never be 0 and must never start at 0
//! - Period: m - 1 = 2147483646 (every nonzero residue visited once)
//!
//! # Seed Domain
//! Valid seeds are [1, 2^31 - 2]. Anything outside (0, 2^31 - 1, or larger)
//! is silently replaced by 1 on construction and on `set_seed`. The strict
//! `try_new` / `try_set_seed` pair rejects such seeds instead.
//!
//! # Safety & Reliability
//! - No heap allocation
//! - No unsafe code
//! - No panics (draws are total, the default constructor normalizes)
//! - Deterministic behavior (same seed → same sequence)
//!
//! # Testing Strategy
//! - Published test vectors (16807, 282475249, 1622650073, and 1043618065 at draw 10000)
//! - Range boundary testing for every derived draw
//! - Chi-square uniformity check for small integer ranges
//! - Full-period check via the primitive-root criterion
//! - Property tests over arbitrary seeds (proptest)

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Multiplier `a` of the recurrence.
pub const MULTIPLIER: u64 = 16_807;

/// Modulus `m = 2^31 - 1`.
pub const MODULUS: u64 = 2_147_483_647;

/// Smallest valid seed.
pub const MIN_SEED: u32 = 1;

/// Largest valid seed, `2^31 - 2`.
pub const MAX_SEED: u32 = 2_147_483_646;

/// Padding applied around integer bounds before rounding a uniform draw.
///
/// Kept just under 0.5 so that `round(min - EPSILON) == min` and
/// `round(max + EPSILON) == max`.
pub const EPSILON: f64 = 0.4999;

/// Seed used by [`MinStd::from_time`] when the system clock cannot be read.
const FALLBACK_SEED: u32 = 123_456_789;

/// Errors reported by the strict seeding API.
///
/// The default API never returns these: it normalizes bad seeds to 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MinStdError {
    /// Seed outside `[MIN_SEED, MAX_SEED]`.
    ///
    /// Context: `try_new()` / `try_set_seed()` with 0 or a value >= 2^31 - 1
    #[error("MINSTD seed error: {seed} is outside [1, 2147483646]")]
    SeedOutOfRange { seed: u32 },
}

/// Park–Miller minimal standard generator.
///
/// # Architecture
/// - Single 32-bit state variable holding a value in [1, 2^31 - 2]
/// - Deterministic: same seed produces same sequence
/// - No heap allocation (4 bytes of state)
/// - Plain owned value: draws need `&mut self`, so sharing across threads
///   requires a lock (see `host_adapter::SharedMinStdRng`)
///
/// # Serialized Form
/// Serializes as the bare seed integer. Deserializing goes through the
/// clamping constructor, so a stored `0` becomes seed 1.
///
/// # Example Usage
/// ```
/// use minstd_random::MinStd;
///
/// let mut rng = MinStd::new(1);
/// assert_eq!(rng.next_raw(), 16807);
///
/// let die = rng.next_int(1, 6);
/// assert!((1..=6).contains(&die));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct MinStd {
    /// Current state, always within [MIN_SEED, MAX_SEED].
    seed: u32,
}

/// Returns `true` when `seed` lies in the generator's domain.
pub fn is_valid_seed(seed: u32) -> bool {
    (MIN_SEED..=MAX_SEED).contains(&seed)
}

fn normalize_seed(seed: u32) -> u32 {
    if is_valid_seed(seed) {
        seed
    } else {
        MIN_SEED
    }
}

/// One application of the recurrence. `seed * a` needs up to 46 bits.
fn step(seed: u32) -> u32 {
    ((u64::from(seed) * MULTIPLIER) % MODULUS) as u32
}

/// `base^exp mod modulus` by square-and-multiply.
///
/// Operands stay below 2^31, so every product fits in a u64.
fn pow_mod(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut result = 1 % modulus;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }
    result
}

impl MinStd {
    /// Creates a generator with the given seed.
    ///
    /// # Seed Normalization
    /// Seeds outside [1, 2^31 - 2] (that is 0, 2^31 - 1, and anything larger)
    /// are replaced by 1. No error is reported and nothing is logged.
    ///
    /// # Arguments
    /// * `seed` - Initial state value
    ///
    /// # Examples
    /// ```
    /// use minstd_random::MinStd;
    ///
    /// assert_eq!(MinStd::new(42).seed(), 42);
    /// assert_eq!(MinStd::new(0).seed(), 1);
    /// assert_eq!(MinStd::new(u32::MAX).seed(), 1);
    /// ```
    pub fn new(seed: u32) -> Self {
        Self {
            seed: normalize_seed(seed),
        }
    }

    /// Strict variant of [`MinStd::new`] that rejects out-of-domain seeds.
    ///
    /// # Returns
    /// - `Ok(MinStd)` - seed was within [1, 2^31 - 2]
    /// - `Err(MinStdError::SeedOutOfRange)` - seed would have been clamped
    ///
    /// # Examples
    /// ```
    /// use minstd_random::{MinStd, MinStdError};
    ///
    /// assert!(MinStd::try_new(7).is_ok());
    /// assert_eq!(
    ///     MinStd::try_new(0),
    ///     Err(MinStdError::SeedOutOfRange { seed: 0 })
    /// );
    /// ```
    pub fn try_new(seed: u32) -> Result<Self, MinStdError> {
        if !is_valid_seed(seed) {
            tracing::debug!(seed, "rejecting out-of-range seed");
            return Err(MinStdError::SeedOutOfRange { seed });
        }
        Ok(Self { seed })
    }

    /// Creates a generator seeded from system time (nanoseconds since Unix epoch).
    ///
    /// # Seeding Strategy
    /// The nanosecond count is reduced into [1, 2^31 - 2], so the result is
    /// always a valid seed and never needs normalization.
    ///
    /// # Fallback
    /// If the clock reads before the epoch, a fixed seed (123456789) is used
    /// and a `warn` event is emitted through `tracing`.
    pub fn from_time() -> Self {
        let seed = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => (d.as_nanos() % u128::from(MAX_SEED)) as u32 + MIN_SEED,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    fallback_seed = FALLBACK_SEED,
                    "system time unavailable, using fallback seed"
                );
                FALLBACK_SEED
            }
        };

        Self { seed }
    }

    /// Current state. Always within [1, 2^31 - 2].
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Replaces the state, applying the same normalization as [`MinStd::new`].
    ///
    /// Returns the value actually stored.
    pub fn set_seed(&mut self, seed: u32) -> u32 {
        self.seed = normalize_seed(seed);
        self.seed
    }

    /// Strict variant of [`MinStd::set_seed`]. Leaves the state untouched on error.
    pub fn try_set_seed(&mut self, seed: u32) -> Result<u32, MinStdError> {
        *self = Self::try_new(seed)?;
        Ok(self.seed)
    }

    /// Advances the state and returns it (the raw recurrence output).
    ///
    /// # Algorithm
    /// ```text
    /// seed_new = (seed_old × 16807) mod (2^31 - 1)
    /// ```
    /// The product is formed in 64 bits before reduction.
    ///
    /// # Returns
    /// An integer in [1, 2147483646]; never 0, never 2^31 - 1
    ///
    /// # Examples
    /// ```
    /// use minstd_random::MinStd;
    ///
    /// let mut rng = MinStd::new(1);
    /// assert_eq!(rng.next_raw(), 16807);
    /// assert_eq!(rng.next_raw(), 282475249);
    /// assert_eq!(rng.next_raw(), 1622650073);
    /// ```
    pub fn next_raw(&mut self) -> i64 {
        self.seed = step(self.seed);
        i64::from(self.seed)
    }

    /// Generates a float in (0.0, 1.0) as `raw / m`.
    ///
    /// # Range Note
    /// The raw output is never 0, so the result is never exactly 0.0. The
    /// largest possible value is (m - 1) / m, just below 1.0.
    pub fn next_uniform(&mut self) -> f64 {
        self.next_raw() as f64 / MODULUS as f64
    }

    /// Generates an integer in [min, max], both ends inclusive.
    ///
    /// # Algorithm: ε-padded rounding
    /// ```text
    /// low  = min - 0.4999
    /// high = max + 0.4999
    /// result = round(low + (high - low) × uniform)
    /// ```
    /// Padding by just under half a unit on each side gives the endpoints
    /// (almost) the same probability mass as interior values.
    ///
    /// # Arguments
    /// * `min` - Inclusive lower bound
    /// * `max` - Inclusive upper bound; must be >= `min`
    ///   (use [`MinStd::next_int_range`] when the order is unknown)
    ///
    /// # Precision
    /// The mapping goes through f64. With bounds beyond ±2^53 the result is
    /// still clamped into [min, max] but adjacent integers are no longer
    /// individually reachable (`next_int(i64::MAX - 1, i64::MAX)` always
    /// yields `i64::MAX`).
    ///
    /// # Examples
    /// ```
    /// use minstd_random::MinStd;
    ///
    /// let mut rng = MinStd::new(2024);
    /// for _ in 0..100 {
    ///     let roll = rng.next_int(1, 6);
    ///     assert!((1..=6).contains(&roll));
    /// }
    /// ```
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        let low = min as f64 - EPSILON;
        let high = max as f64 + EPSILON;
        let value = (low + (high - low) * self.next_uniform()).round() as i64;

        // Float rounding at extreme magnitudes can step outside the bounds.
        value.max(min).min(max)
    }

    /// [`MinStd::next_int`] with the bounds given in either order.
    pub fn next_int_range(&mut self, lo: i64, hi: i64) -> i64 {
        if lo > hi {
            self.next_int(hi, lo)
        } else {
            self.next_int(lo, hi)
        }
    }

    /// Generates a float between `min` and `max` as `min + (max - min) × uniform`.
    ///
    /// When `max - min` overflows to infinity (bounds near ±f64::MAX) the
    /// draw is interpolated as `min × (1 - u) + max × u` instead, which stays
    /// finite. Ordinary spans always take the first form.
    pub fn next_float(&mut self, min: f64, max: f64) -> f64 {
        let u = self.next_uniform();
        let span = max - min;
        if span.is_finite() {
            min + span * u
        } else {
            min * (1.0 - u) + max * u
        }
    }

    /// [`MinStd::next_float`] with the bounds given in either order.
    pub fn next_float_range(&mut self, lo: f64, hi: f64) -> f64 {
        if lo > hi {
            self.next_float(hi, lo)
        } else {
            self.next_float(lo, hi)
        }
    }

    /// Generates a boolean that is `true` when a uniform draw is <= 0.4999.
    ///
    /// # Bias
    /// P(true) ≈ 0.4999 and P(false) ≈ 0.5001. This matches other minimal
    /// standard ports bit for bit; it is not a fair coin.
    pub fn next_bool(&mut self) -> bool {
        self.next_uniform() <= EPSILON
    }

    /// Generates an integer in [0, upper), exclusive of `upper`.
    ///
    /// Implemented as `next_int(0, upper - 1)`, so the ε-padding wraps the
    /// last valid value rather than `upper` itself and `upper` is never
    /// returned. An `upper` of 0 or 1 yields 0. The state still advances
    /// once in every case.
    pub fn next_int_bounded(&mut self, upper: u32) -> u32 {
        let max = i64::from(upper.saturating_sub(1));
        self.next_int(0, max) as u32
    }

    /// Moves the state forward by `steps` transitions without producing output.
    ///
    /// # Algorithm
    /// Since the recurrence has no increment, n steps collapse to one
    /// multiplication: `seed × a^n mod m`, with `a^n` computed by
    /// square-and-multiply in O(log n).
    ///
    /// `advance(n)` leaves the generator exactly where n calls to
    /// [`MinStd::next_raw`] would.
    ///
    /// # Examples
    /// ```
    /// use minstd_random::MinStd;
    ///
    /// let mut skipped = MinStd::new(1);
    /// skipped.advance(9_999);
    /// assert_eq!(skipped.next_raw(), 1_043_618_065);
    /// ```
    pub fn advance(&mut self, steps: u64) {
        let factor = pow_mod(MULTIPLIER, steps, MODULUS);
        self.seed = ((u64::from(self.seed) * factor) % MODULUS) as u32;
    }
}

impl Default for MinStd {
    /// Time-seeded instance (equivalent to `MinStd::from_time()`).
    fn default() -> Self {
        Self::from_time()
    }
}

impl From<u32> for MinStd {
    fn from(seed: u32) -> Self {
        Self::new(seed)
    }
}

impl From<MinStd> for u32 {
    fn from(rng: MinStd) -> Self {
        rng.seed
    }
}

// ============================================================================
// TESTING
// ============================================================================
