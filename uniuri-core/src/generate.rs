use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::{Error, Result};
use crate::options::{chars, length, Opt, Options};
use crate::sampler::{sample_with, Alphabet};

/// Returns a random string of [`STD_LEN`](crate::STD_LEN) symbols drawn
/// from [`STD_CHARS`](crate::STD_CHARS).
///
/// # Errors
/// Returns [`Error::RandomSourceUnavailable`](crate::Error) if the operating
/// system cannot provide random bytes.
pub fn new() -> Result<String> {
	new_with(std::iter::empty())
}

/// Returns random bytes of the standard length and alphabet.
pub fn new_bytes() -> Result<Vec<u8>> {
	new_bytes_with(std::iter::empty())
}

/// Returns a random string, starting from the standard length and alphabet
/// and applying `opts` in order.
///
/// ```no_run
/// use uniuri_core::{chars, length, new_with};
///
/// let pin = new_with([length(6), chars("0123456789")])?;
/// # Ok::<(), uniuri_core::Error>(())
/// ```
///
/// # Errors
/// - `InvalidAlphabet` if the alphabet holds fewer than 2 or more than 256 symbols.
/// - `RandomSourceUnavailable` if the operating system source fails.
/// - `NotText` if the alphabet holds a non-ASCII byte.
pub fn new_with<I>(opts: I) -> Result<String>
where
	I: IntoIterator<Item = Opt>,
{
	new_with_rng(&mut OsRng, opts)
}

/// Same as [`new_with`], reading from `rng` instead of the operating system.
pub fn new_with_rng<R, I>(rng: &mut R, opts: I) -> Result<String>
where
	R: TryRngCore + ?Sized,
	I: IntoIterator<Item = Opt>,
{
	generate_text(rng, &Options::from_opts(opts))
}

/// Returns random bytes, starting from the standard length and alphabet and
/// applying `opts` in order.
pub fn new_bytes_with<I>(opts: I) -> Result<Vec<u8>>
where
	I: IntoIterator<Item = Opt>,
{
	new_bytes_with_rng(&mut OsRng, opts)
}

/// Same as [`new_bytes_with`], reading from `rng`.
pub fn new_bytes_with_rng<R, I>(rng: &mut R, opts: I) -> Result<Vec<u8>>
where
	R: TryRngCore + ?Sized,
	I: IntoIterator<Item = Opt>,
{
	generate(rng, &Options::from_opts(opts))
}

/// Samples the request described by `options`.
pub fn generate<R>(rng: &mut R, options: &Options) -> Result<Vec<u8>>
where
	R: TryRngCore + ?Sized,
{
	sample_with(rng, options.length, &options.chars)
}

/// Samples the request described by `options` as text.
///
/// The alphabet is checked before any read from `rng`: every symbol must be
/// an ASCII character, so that each sampled byte is exactly one character.
///
/// # Errors
/// Same as [`generate`], plus [`Error::NotText`] for a non-ASCII alphabet.
pub fn generate_text<R>(rng: &mut R, options: &Options) -> Result<String>
where
	R: TryRngCore + ?Sized,
{
	if options.length == 0 {
		return Ok(String::new());
	}
	let alphabet = Alphabet::new(&options.chars)?;
	if let Some(&symbol) = alphabet.as_bytes().iter().find(|b| !b.is_ascii()) {
		log::debug!("rejecting text alphabet with byte {symbol:#04x}");
		return Err(Error::NotText { symbol });
	}

	let bytes = sample_with(rng, options.length, alphabet.as_bytes())?;
	Ok(bytes.into_iter().map(char::from).collect())
}

/// Returns a random string of `len` standard symbols.
#[deprecated(note = "use `new_with([length(len)])` instead")]
pub fn new_len(len: usize) -> Result<String> {
	new_with([length(len)])
}

/// Returns a random string of `len` symbols drawn from `symbols`.
#[deprecated(note = "use `new_with([length(len), chars(symbols)])` instead")]
pub fn new_len_chars(len: usize, symbols: &[u8]) -> Result<String> {
	new_with([length(len), chars(symbols)])
}

/// Returns `len` random bytes drawn from `symbols`.
#[deprecated(note = "use `new_bytes_with([length(len), chars(symbols)])` instead")]
pub fn new_len_chars_bytes(len: usize, symbols: &[u8]) -> Result<Vec<u8>> {
	new_bytes_with([length(len), chars(symbols)])
}
