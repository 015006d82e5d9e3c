use rand::TryRngCore;
use rand::rngs::OsRng;

use super::alphabet::Alphabet;
use super::buffer::{initial_buf_len, refill_buf_len};
use crate::error::{Error, Result};

/// Draws `length` symbols uniformly from `chars` using the operating
/// system's secure random source.
///
/// See [`sample_with`] for the algorithm and error conditions.
pub fn sample(length: usize, chars: &[u8]) -> Result<Vec<u8>> {
	sample_with(&mut OsRng, length, chars)
}

/// Draws `length` symbols uniformly from `chars` using `rng`.
///
/// Random bytes are read in batches sized from the expected acceptance
/// rate, so that a request is usually served by a single read. Bytes above
/// the alphabet's rejection threshold are discarded, the others select
/// `chars[byte % chars.len()]`.
///
/// # Errors
/// - [`Error::InvalidAlphabet`] if `chars` holds fewer than 2 or more than
///   256 symbols.
/// - [`Error::RandomSourceUnavailable`] if `rng` fails. The read is not
///   retried and no other source is tried.
///
/// # Notes
/// - A zero `length` returns an empty vector without touching `rng` or
///   validating `chars`.
/// - The loop only ends once `length` symbols are accepted. A source that
///   never yields an acceptable byte keeps it running forever; this is
///   inherent to rejection sampling.
pub fn sample_with<R>(rng: &mut R, length: usize, chars: &[u8]) -> Result<Vec<u8>>
where
	R: TryRngCore + ?Sized,
{
	if length == 0 {
		return Ok(Vec::new());
	}
	let alphabet = Alphabet::new(chars)?;
	let max_accept = alphabet.max_accept();

	let mut buf_len = initial_buf_len(length, max_accept);
	let mut buf = vec![0u8; buf_len];
	let mut out = Vec::with_capacity(length);

	loop {
		log::trace!("reading {buf_len} random bytes, {} of {length} symbols emitted", out.len());
		rng.try_fill_bytes(&mut buf[..buf_len]).map_err(|e| {
			log::debug!("random source failed: {e}");
			Error::RandomSourceUnavailable(e.to_string())
		})?;

		for &raw in &buf[..buf_len] {
			if let Some(symbol) = alphabet.symbol(raw) {
				out.push(symbol);
				if out.len() == length {
					return Ok(out);
				}
			}
		}

		buf_len = refill_buf_len(length - out.len(), max_accept, buf.len());
	}
}
