//! Host adapters for the minimal standard generator.
//!
//! The core [`MinStd`] type knows nothing about outside random-source
//! interfaces. This module wraps it for two kinds of host:
//! - hosts that speak the three-operation [`RandomSource`] contract
//!   (raw next, uniform next, bounded next)
//! - the `rand_core` ecosystem (`RngCore` / `SeedableRng`), so the generator
//!   can drive any `rand`-style consumer
//!
//! [`SharedMinStdRng`] is for hosts that pass one generator around by
//! identity. Its clones draw from the same state behind a mutex.
//!
//! None of the adapters touch the recurrence; every draw goes through
//! [`MinStd`].

use std::sync::{Arc, Mutex, PoisonError};

use rand_core::{impls, Error, RngCore, SeedableRng};

use crate::park_miller_lcg::MinStd;

/// Generic random-source contract expected by host integrations.
pub trait RandomSource {
    /// Raw recurrence output in [1, 2^31 - 2].
    fn next_raw(&mut self) -> i64;

    /// Uniform float in (0, 1).
    fn next_uniform(&mut self) -> f64;

    /// Integer in [0, upper_bound). Returns 0 when `upper_bound` is 0 or 1.
    fn next_bounded(&mut self, upper_bound: u32) -> u32;
}

/// Builds a full 32-bit word from the low halves of two raw draws, high half first.
///
/// Raw draws only span 31 bits and never hit 0, so a single draw cannot
/// fill a u32 evenly.
fn next_word(rng: &mut MinStd) -> u32 {
    let high = rng.next_raw() as u32 & 0xFFFF;
    let low = rng.next_raw() as u32 & 0xFFFF;
    (high << 16) | low
}

/// Owned adapter around a [`MinStd`] generator.
///
/// # Example Usage
/// ```
/// use minstd_random::{MinStdRng, RandomSource};
/// use rand_core::RngCore;
///
/// let mut rng = MinStdRng::new(1);
/// assert_eq!(rng.next_raw(), 16807);
///
/// let mut bytes = [0u8; 8];
/// rng.fill_bytes(&mut bytes);
/// assert!(rng.next_bounded(10) < 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinStdRng {
    inner: MinStd,
}

impl MinStdRng {
    /// Creates an adapter with the given seed (clamped like [`MinStd::new`]).
    pub fn new(seed: u32) -> Self {
        Self {
            inner: MinStd::new(seed),
        }
    }

    /// Wrapped generator, for reading its seed or comparing states.
    pub fn generator(&self) -> &MinStd {
        &self.inner
    }

    /// Unwraps the adapter, keeping the generator's current state.
    pub fn into_inner(self) -> MinStd {
        self.inner
    }
}

impl From<MinStd> for MinStdRng {
    fn from(inner: MinStd) -> Self {
        Self { inner }
    }
}

impl RandomSource for MinStdRng {
    fn next_raw(&mut self) -> i64 {
        self.inner.next_raw()
    }

    fn next_uniform(&mut self) -> f64 {
        self.inner.next_uniform()
    }

    fn next_bounded(&mut self, upper_bound: u32) -> u32 {
        self.inner.next_int_bounded(upper_bound)
    }
}

impl RngCore for MinStdRng {
    /// Two raw draws per word (see `next_word`).
    fn next_u32(&mut self) -> u32 {
        next_word(&mut self.inner)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinStdRng {
    /// Little-endian u32 seed.
    type Seed = [u8; 4];

    /// Out-of-domain seeds are clamped to 1, as with [`MinStd::new`].
    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Shared handle to one generator.
///
/// Clones refer to the same state; every draw takes the lock, so draws from
/// different threads are serialized. The interleaving between threads is
/// up to the scheduler, so only single-owner use is reproducible.
///
/// A poisoned lock is recovered: the state is a single integer that is
/// valid after every completed write.
#[derive(Debug, Clone)]
pub struct SharedMinStdRng {
    inner: Arc<Mutex<MinStd>>,
}

impl SharedMinStdRng {
    /// Creates a fresh shared generator (seed clamped like [`MinStd::new`]).
    pub fn new(seed: u32) -> Self {
        Self::from(MinStd::new(seed))
    }

    /// Current seed of the shared state.
    pub fn seed(&self) -> u32 {
        self.with(|rng| rng.seed())
    }

    /// Clamps like [`MinStd::set_seed`]; visible to every clone.
    pub fn set_seed(&self, seed: u32) -> u32 {
        self.with(|rng| rng.set_seed(seed))
    }

    /// Copy of the current state, detached from the shared handle.
    pub fn snapshot(&self) -> MinStd {
        self.with(|rng| rng.clone())
    }

    /// `true` when both handles point at the same generator.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn with<T>(&self, f: impl FnOnce(&mut MinStd) -> T) -> T {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }
}

impl From<MinStd> for SharedMinStdRng {
    fn from(rng: MinStd) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }
}

impl RandomSource for SharedMinStdRng {
    fn next_raw(&mut self) -> i64 {
        self.with(|rng| rng.next_raw())
    }

    fn next_uniform(&mut self) -> f64 {
        self.with(|rng| rng.next_uniform())
    }

    fn next_bounded(&mut self, upper_bound: u32) -> u32 {
        self.with(|rng| rng.next_int_bounded(upper_bound))
    }
}

impl RngCore for SharedMinStdRng {
    // Both halves are drawn under one lock so words never interleave.
    fn next_u32(&mut self) -> u32 {
        self.with(next_word)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
