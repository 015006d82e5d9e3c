//! Rejection-sampling engine.
//!
//! Turns a stream of uniformly random bytes into uniformly random symbols
//! of an arbitrary alphabet (2 to 256 symbols) without modulo bias:
//! - Alphabet validation and rejection threshold (`Alphabet`)
//! - Adaptive sizing of the working buffer (`buffer`)
//! - The sampling loop itself (`sample`, `sample_with`)

/// Validated alphabet and its rejection threshold.
pub mod alphabet;

/// Working-buffer sizing.
///
/// Estimates how many random bytes to request given the expected rejection
/// rate, bounded by a minimum refill size and a maximum buffer size.
pub mod buffer;

/// The sampling loop over a `rand::TryRngCore` source.
mod rejection;

#[cfg(test)]
pub(crate) mod doubles;

pub use alphabet::Alphabet;
pub use rejection::{sample, sample_with};
