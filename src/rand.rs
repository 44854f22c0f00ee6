//! # Reproducible random messages
//!
//! This module uses the [`ChaCha8Rng`] RNG from the [rand_chacha] crate to
//! generate reproducible random messages for tests and benchmarks.
//!
//! # Examples
//! ```
//! # use nr_ldpc_encoder::rand::*;
//! let a = random_message(&mut Rng::seed_from_u64(42), 20);
//! let b = random_message(&mut Rng::seed_from_u64(42), 20);
//! assert_eq!(a, b);
//! assert!(a.iter().all(|&x| x <= 1));
//! ```
use rand::{distributions::Standard, Rng as _};
use rand_chacha::ChaCha8Rng;
pub use rand_chacha::rand_core::SeedableRng;
pub use rand_core::RngCore;

/// The RNG used throughout this crate.
pub type Rng = ChaCha8Rng;

/// Generates a random message with one bit per byte.
pub fn random_message<R: rand::Rng>(rng: &mut R, len: usize) -> Vec<u8> {
    rng.sample_iter(Standard)
        .map(<u8 as From<bool>>::from)
        .take(len)
        .collect()
}
