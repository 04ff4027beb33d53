//! Park–Miller "minimal standard" pseudo-random number generator.
//!
//! [`MinStd`] is the generator itself: a single 31-bit seed advanced by
//! `seed = seed * 16807 mod (2^31 - 1)`, plus derived draws built on that
//! step. [`MinStdRng`] and [`SharedMinStdRng`] adapt it to host random-source
//! interfaces, including `rand_core`.
//!
//! Not for security-sensitive randomness.

pub mod host_adapter;
pub mod park_miller_lcg;

pub use host_adapter::{MinStdRng, RandomSource, SharedMinStdRng};
pub use park_miller_lcg::{
    is_valid_seed, MinStd, MinStdError, EPSILON, MAX_SEED, MIN_SEED, MODULUS, MULTIPLIER,
};
