//! Random strings good for use in URIs to identify unique objects.
//!
//! This crate provides an unbiased random-string generator including:
//! - A rejection-sampling engine mapping secure random bytes onto any
//!   alphabet of 2 to 256 symbols without modulo bias
//! - Adaptive batching of reads from the random source
//! - A small facade with standard defaults and composable options
//!
//! A standard string is [`STD_LEN`] symbols long and drawn from the 62
//! [`STD_CHARS`], which gives ~95 bits of entropy. [`UUID_LEN`] symbols
//! give ~119 bits, the closest to what a UUIDv4 (122 bits) carries.
//!
//! ```no_run
//! let id = uniuri_core::new()?; // e.g. "apHCJBl7L1OmC57n"
//! # Ok::<(), uniuri_core::Error>(())
//! ```
//!
//! Randomness comes from the operating system through `rand::rngs::OsRng`
//! unless a source is passed explicitly. Failures are returned, never
//! papered over with a weaker source.

/// Error type shared by every operation.
mod error;

/// Facade functions: defaults, options form and deprecated positional forms.
mod generate;

/// Request value and the functional overrides that build it.
pub mod options;

/// Rejection-sampling engine.
pub mod sampler;

pub use error::{Error, Result};
pub use generate::{generate, generate_text, new, new_bytes, new_bytes_with, new_bytes_with_rng, new_with, new_with_rng};
#[allow(deprecated)]
pub use generate::{new_len, new_len_chars, new_len_chars_bytes};
pub use options::{chars, length, Opt, Options};
pub use sampler::{sample, sample_with, Alphabet};

/// Standard length of a string, ~95 bits of entropy over [`STD_CHARS`].
pub const STD_LEN: usize = 16;

/// Length giving ~119 bits of entropy over [`STD_CHARS`], closest to what
/// can be losslessly converted to a UUIDv4 (122 bits).
pub const UUID_LEN: usize = 20;

/// Standard alphabet: Latin upper and lowercase letters, then digits.
pub const STD_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
