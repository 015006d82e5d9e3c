/// Errors that can occur while generating a random string.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
	/// The alphabet has fewer than 2 or more than 256 symbols.
	InvalidAlphabet {
		/// Number of symbols that were supplied.
		len: usize,
	},
	/// The secure random source failed to produce bytes.
	RandomSourceUnavailable(String),
	/// Text was requested but the alphabet holds a byte that is not a
	/// single-byte (ASCII) character.
	NotText {
		/// First offending byte of the alphabet.
		symbol: u8,
	},
}

/// Shorthand for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::InvalidAlphabet { len } => {
				write!(f, "alphabet must hold between 2 and 256 symbols, got {len}")
			}
			Error::RandomSourceUnavailable(reason) => {
				write!(f, "error reading random bytes: {reason}")
			}
			Error::NotText { symbol } => {
				write!(f, "alphabet byte {symbol:#04x} is not an ASCII character")
			}
		}
	}
}

impl std::error::Error for Error {}
