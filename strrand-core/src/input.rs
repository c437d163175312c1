use serde::{Deserialize, Serialize};

use crate::charset::{Charset, NamedCharset};
use crate::error::{Error, Result};
use crate::generator::Generator;

/// Length used when none is configured.
pub const DEFAULT_LENGTH: i64 = 16;

/// Which characters a `GenerationInput` draws from.
///
/// Serialized externally tagged with lowercase tags:
/// `{"named": "hexadecimal"}` or `{"custom": "xy"}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CharsetChoice {
	Named(NamedCharset),
	Custom(String),
}

impl Default for CharsetChoice {
	fn default() -> Self {
		CharsetChoice::Named(NamedCharset::Default)
	}
}

impl CharsetChoice {
	/// Decodes the choice into a sampling charset.
	pub fn to_charset(&self) -> Charset {
		match self {
			CharsetChoice::Named(named) => Charset::from(*named),
			CharsetChoice::Custom(chars) => Charset::new(chars),
		}
	}
}

/// A generation request: how many strings, how long, from which charset.
///
/// Every field is optional when deserializing; missing fields take their
/// default (`length` = 16, `count` = 1, default charset).
///
/// # Invariants
/// - A custom charset set through `set_custom_charset` is never empty.
///   Deserialized input is not checked up front; an empty custom charset
///   surfaces as `Error::EmptyCharset` from `generate`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationInput {
	/// Characters per string. Zero or negative produces empty strings.
	pub length: i64,

	/// Number of strings to produce.
	pub count: usize,

	charset: CharsetChoice,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self { length: DEFAULT_LENGTH, count: 1, charset: CharsetChoice::default() }
	}
}

impl GenerationInput {
	/// A request for a single string of `length` characters over the
	/// default charset.
	pub fn new(length: i64) -> Self {
		Self { length, ..Self::default() }
	}

	pub fn charset(&self) -> &CharsetChoice {
		&self.charset
	}

	/// Selects one of the predefined charsets.
	pub fn set_named_charset(&mut self, named: NamedCharset) {
		self.charset = CharsetChoice::Named(named);
	}

	/// Selects a predefined charset by name (`"base62"`, `"hexadecimal"`...).
	///
	/// # Errors
	/// Returns `Error::UnknownCharset` if the name is not recognized.
	pub fn set_charset_by_name(&mut self, name: &str) -> Result<()> {
		self.set_named_charset(name.parse()?);
		Ok(())
	}

	/// Selects a custom charset.
	///
	/// # Errors
	/// Returns `Error::EmptyCharset` if `chars` is empty.
	pub fn set_custom_charset(&mut self, chars: &str) -> Result<()> {
		if chars.is_empty() {
			return Err(Error::EmptyCharset);
		}
		self.charset = CharsetChoice::Custom(chars.to_owned());
		Ok(())
	}

	/// Produces `count` strings as described by this input.
	///
	/// # Errors
	/// See [`Generator::generate_batch`].
	pub fn generate(&self) -> Result<Vec<String>> {
		Generator::new(self.charset.to_charset()).generate_batch(self.count, self.length)
	}
}
