use crate::error::{Error, Result};

/// Smallest number of symbols an alphabet may hold.
pub const MIN_SYMBOLS: usize = 2;

/// Largest number of symbols an alphabet may hold (one per byte value).
pub const MAX_SYMBOLS: usize = 256;

/// A validated, borrowed alphabet together with its rejection threshold.
///
/// The alphabet maps an accepted random byte `v` to `chars[v % len]`.
/// Bytes above `max_accept` are rejected: keeping them would make the
/// residue classes unevenly populated whenever 256 is not a multiple of
/// the alphabet size, favouring the first symbols.
///
/// # Invariants
/// - `MIN_SYMBOLS <= chars.len() <= MAX_SYMBOLS`
/// - `max_accept + 1` is an exact multiple of `chars.len()`
///
/// Duplicate symbols are not rejected. They remain valid input but give the
/// duplicated value a proportionally higher probability.
#[derive(Debug, Clone, Copy)]
pub struct Alphabet<'a> {
	chars: &'a [u8],
	max_accept: u8,
}

impl<'a> Alphabet<'a> {
	/// Validates `chars` and computes its rejection threshold.
	///
	/// # Errors
	/// Returns [`Error::InvalidAlphabet`] if `chars` holds fewer than 2 or
	/// more than 256 symbols.
	pub fn new(chars: &'a [u8]) -> Result<Self> {
		let len = chars.len();
		if !(MIN_SYMBOLS..=MAX_SYMBOLS).contains(&len) {
			log::debug!("rejecting alphabet of {len} symbols");
			return Err(Error::InvalidAlphabet { len });
		}

		// 255 - (256 % len) always fits a byte and is at least 128.
		let max_accept = (255 - (256 % len)) as u8;
		Ok(Self { chars, max_accept })
	}

	/// Number of symbols in the alphabet.
	pub fn len(&self) -> usize {
		self.chars.len()
	}

	/// Always `false`: a validated alphabet holds at least two symbols.
	pub fn is_empty(&self) -> bool {
		false
	}

	/// Largest random byte value that may select a symbol without bias.
	pub fn max_accept(&self) -> u8 {
		self.max_accept
	}

	/// Maps a raw random byte to a symbol.
	///
	/// Returns `None` when the byte falls above [`Alphabet::max_accept`] and
	/// must be discarded.
	#[inline]
	pub fn symbol(&self, raw: u8) -> Option<u8> {
		if raw > self.max_accept {
			return None;
		}
		Some(self.chars[raw as usize % self.chars.len()])
	}

	/// The underlying symbols, in order.
	pub fn as_bytes(&self) -> &'a [u8] {
		self.chars
	}
}
