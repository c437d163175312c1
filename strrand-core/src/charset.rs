use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Binary digits (`0`, `1`).
pub const BINARY: &str = "01";
/// Octal digits (`0`-`7`).
pub const OCTAL: &str = "01234567";
/// Decimal digits (`0`-`9`).
pub const DECIMAL: &str = "0123456789";
/// Lowercase hexadecimal digits (`0`-`9`, `a`-`f`).
pub const HEXADECIMAL: &str = "0123456789abcdef";

/// Uppercase ASCII letters (`A`-`Z`).
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase ASCII letters (`a`-`z`).
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Printable ASCII punctuation.
pub const SPECIAL: &str = "!@#$%^&*()-_=+[]{}|;:',.<>?/`~";

// Composites below are spelled out because `concat!` only takes literals.
// Their composition is checked by the tests of this module.

/// `UPPERCASE` followed by `LOWERCASE`.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
/// `DECIMAL` followed by `ALPHABET`.
pub const BASE62: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
/// `BASE62` followed by `+/`.
pub const BASE64: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+/";
/// `BASE62` followed by `SPECIAL`.
pub const DEFAULT: &str =
	"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!@#$%^&*()-_=+[]{}|;:',.<>?/`~";

/// The predefined charsets, addressable by name.
///
/// Names are lowercase both for serde and for `FromStr` / `Display`,
/// e.g. `"hexadecimal"` or `"base62"`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum NamedCharset {
	Binary,
	Octal,
	Decimal,
	Hexadecimal,
	Uppercase,
	Lowercase,
	Special,
	Alphabet,
	Base62,
	Base64,
	#[default]
	Default,
}

impl NamedCharset {
	/// Every predefined charset, in declaration order.
	pub const ALL: [NamedCharset; 11] = [
		NamedCharset::Binary,
		NamedCharset::Octal,
		NamedCharset::Decimal,
		NamedCharset::Hexadecimal,
		NamedCharset::Uppercase,
		NamedCharset::Lowercase,
		NamedCharset::Special,
		NamedCharset::Alphabet,
		NamedCharset::Base62,
		NamedCharset::Base64,
		NamedCharset::Default,
	];

	/// Returns the characters of this charset.
	pub const fn as_str(self) -> &'static str {
		match self {
			NamedCharset::Binary => BINARY,
			NamedCharset::Octal => OCTAL,
			NamedCharset::Decimal => DECIMAL,
			NamedCharset::Hexadecimal => HEXADECIMAL,
			NamedCharset::Uppercase => UPPERCASE,
			NamedCharset::Lowercase => LOWERCASE,
			NamedCharset::Special => SPECIAL,
			NamedCharset::Alphabet => ALPHABET,
			NamedCharset::Base62 => BASE62,
			NamedCharset::Base64 => BASE64,
			NamedCharset::Default => DEFAULT,
		}
	}

	/// Returns the lowercase name of this charset.
	pub const fn name(self) -> &'static str {
		match self {
			NamedCharset::Binary => "binary",
			NamedCharset::Octal => "octal",
			NamedCharset::Decimal => "decimal",
			NamedCharset::Hexadecimal => "hexadecimal",
			NamedCharset::Uppercase => "uppercase",
			NamedCharset::Lowercase => "lowercase",
			NamedCharset::Special => "special",
			NamedCharset::Alphabet => "alphabet",
			NamedCharset::Base62 => "base62",
			NamedCharset::Base64 => "base64",
			NamedCharset::Default => "default",
		}
	}
}

impl fmt::Display for NamedCharset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for NamedCharset {
	type Err = Error;

	/// Parses a charset name, ignoring ASCII case.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		NamedCharset::ALL
			.into_iter()
			.find(|named| named.name().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| Error::UnknownCharset(s.to_owned()))
	}
}

/// An ordered sequence of characters eligible for sampling.
///
/// Characters are Unicode code points, not bytes: `"é€"` is a charset of
/// two entries. Duplicates are kept, so a repeated character is drawn more
/// often than the others.
///
/// Serialized as a plain string.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub struct Charset {
	chars: Vec<char>,
}

impl Charset {
	/// Decodes `chars` into a charset.
	pub fn new(chars: &str) -> Self {
		Self { chars: chars.chars().collect() }
	}

	/// Number of code points (duplicates included).
	pub fn len(&self) -> usize {
		self.chars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chars.is_empty()
	}

	/// Returns the code point at `index`, if any.
	pub fn get(&self, index: usize) -> Option<char> {
		self.chars.get(index).copied()
	}

	/// Whether `c` may appear in strings drawn from this charset.
	pub fn contains(&self, c: char) -> bool {
		self.chars.contains(&c)
	}

	pub fn as_chars(&self) -> &[char] {
		&self.chars
	}
}

impl From<&str> for Charset {
	fn from(chars: &str) -> Self {
		Self::new(chars)
	}
}

impl From<String> for Charset {
	fn from(chars: String) -> Self {
		Self::new(&chars)
	}
}

impl From<Charset> for String {
	fn from(charset: Charset) -> Self {
		charset.chars.into_iter().collect()
	}
}

impl From<NamedCharset> for Charset {
	fn from(named: NamedCharset) -> Self {
		Self::new(named.as_str())
	}
}
