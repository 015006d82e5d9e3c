use serde::{Deserialize, Serialize};

use crate::{STD_CHARS, STD_LEN};

/// A single generation request: how many symbols, from which alphabet.
///
/// Every public entry point builds one `Options` value and hands it to the
/// sampler. Fields missing from a deserialized value fall back to the
/// standard length and alphabet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Options {
	/// Number of symbols to generate.
	pub length: usize,

	/// Allowed symbols, 2 to 256 of them.
	pub chars: Vec<u8>,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			length: STD_LEN,
			chars: STD_CHARS.to_vec(),
		}
	}
}

impl Options {
	/// Applies `opts` in order on top of the defaults.
	///
	/// Later options override earlier ones.
	pub fn from_opts<I>(opts: I) -> Self
	where
		I: IntoIterator<Item = Opt>,
	{
		let mut options = Self::default();
		for opt in opts {
			options.apply(opt);
		}
		options
	}

	/// Overrides the single value carried by `opt`.
	pub fn apply(&mut self, opt: Opt) {
		match opt {
			Opt::Length(length) => self.length = length,
			Opt::Chars(chars) => self.chars = chars,
		}
	}
}

/// One override of the default [`Options`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Opt {
	/// Sets the number of symbols.
	Length(usize),
	/// Sets the alphabet.
	Chars(Vec<u8>),
}

/// Overrides the output length.
pub fn length(length: usize) -> Opt {
	Opt::Length(length)
}

/// Overrides the alphabet.
pub fn chars(chars: impl Into<Vec<u8>>) -> Opt {
	Opt::Chars(chars.into())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_to_standard_values() {
		let options = Options::from_opts(std::iter::empty());
		assert_eq!(options.length, 16);
		assert_eq!(options.chars.len(), 62);
	}

	#[test]
	fn each_option_overrides_one_value() {
		let options = Options::from_opts([length(20)]);
		assert_eq!(options.length, 20);
		assert_eq!(options.chars, STD_CHARS);

		let options = Options::from_opts([chars("01")]);
		assert_eq!(options.length, STD_LEN);
		assert_eq!(options.chars, b"01");
	}

	#[test]
	fn later_options_win() {
		let options = Options::from_opts([length(4), chars(b"abc".as_slice()), length(8)]);
		assert_eq!(options.length, 8);
		assert_eq!(options.chars, b"abc");
	}

	#[test]
	fn deserializes_with_defaults() {
		let options: Options = serde_json::from_str(r#"{"length": 32}"#).unwrap();
		assert_eq!(options.length, 32);
		assert_eq!(options.chars, STD_CHARS);

		let options: Options = serde_json::from_str(r#"{"chars": [48, 49]}"#).unwrap();
		assert_eq!(options.length, STD_LEN);
		assert_eq!(options.chars, b"01");
	}
}
