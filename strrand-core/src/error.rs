use thiserror::Error;

/// Errors produced while generating random strings.
///
/// Only `EntropyUnavailable` comes from the outside world; the other
/// variants describe input that cannot be sampled from.
#[derive(Debug, Error)]
pub enum Error {
	/// The operating system could not provide secure random bytes.
	///
	/// There is no fallback to a non-cryptographic generator.
	#[error("secure random source unavailable: {0}")]
	EntropyUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

	/// A charset with no characters was asked for a non-empty string.
	#[error("charset is empty, cannot pick characters from it")]
	EmptyCharset,

	/// The charset holds more characters than a 32-bit draw can index.
	#[error("charset has {0} characters, at most 4294967295 are supported")]
	CharsetTooLarge(usize),

	/// A charset name did not match any predefined charset.
	#[error("unknown charset '{0}'")]
	UnknownCharset(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
