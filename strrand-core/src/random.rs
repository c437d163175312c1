//! One-call helpers, one per predefined charset.
//!
//! Every helper takes any integer length. Zero or negative lengths give an
//! empty string. The helpers panic only if the operating system cannot
//! provide secure random bytes; use [`try_generate_string`] or
//! [`Generator::try_generate`](crate::generator::Generator::try_generate)
//! to handle that case as an error instead.

use crate::charset::{self, Charset};
use crate::error::Result;
use crate::generator::{build, clamp_length, fatal};
use crate::sampler::OsEntropy;

fn random<L: TryInto<usize>>(length: L, charset: &str) -> String {
	try_random(length, charset).unwrap_or_else(|e| fatal(e))
}

fn try_random<L: TryInto<usize>>(length: L, charset: &str) -> Result<String> {
	build(&mut OsEntropy, clamp_length(length), &Charset::new(charset))
}

/// Random string of `0` and `1`.
pub fn binary<L: TryInto<usize>>(length: L) -> String {
	random(length, charset::BINARY)
}

/// Random string of octal digits (`0`-`7`).
pub fn octal<L: TryInto<usize>>(length: L) -> String {
	random(length, charset::OCTAL)
}

/// Random string of decimal digits (`0`-`9`).
pub fn decimal<L: TryInto<usize>>(length: L) -> String {
	random(length, charset::DECIMAL)
}

/// Random string of lowercase hexadecimal digits (`0`-`9`, `a`-`f`).
pub fn hexadecimal<L: TryInto<usize>>(length: L) -> String {
	random(length, charset::HEXADECIMAL)
}

/// Random string of uppercase letters (`A`-`Z`).
pub fn capital_letters<L: TryInto<usize>>(length: L) -> String {
	random(length, charset::UPPERCASE)
}

/// Random string of lowercase letters (`a`-`z`).
pub fn lowercase_letters<L: TryInto<usize>>(length: L) -> String {
	random(length, charset::LOWERCASE)
}

/// Random string of special characters, see [`charset::SPECIAL`].
pub fn special_letters<L: TryInto<usize>>(length: L) -> String {
	random(length, charset::SPECIAL)
}

/// Random string over `0-9A-Za-z`.
pub fn base62<L: TryInto<usize>>(length: L) -> String {
	random(length, charset::BASE62)
}

/// Random string over `0-9A-Za-z+/`.
///
/// This draws characters from the base64 alphabet; it is not the base64
/// encoding of random bytes.
pub fn base64<L: TryInto<usize>>(length: L) -> String {
	random(length, charset::BASE64)
}

/// Random string of upper and lowercase letters.
pub fn letters<L: TryInto<usize>>(length: L) -> String {
	random(length, charset::ALPHABET)
}

/// Random string over the default charset (base62 + special characters).
pub fn default_string<L: TryInto<usize>>(length: L) -> String {
	random(length, charset::DEFAULT)
}

/// Random string over `custom_charset`, or the default charset when `None`.
///
/// # Panics
/// If the secure random source is unavailable, or if `custom_charset` is
/// `Some("")` and `length > 0`.
pub fn generate_string<L: TryInto<usize>>(length: L, custom_charset: Option<&str>) -> String {
	try_generate_string(length, custom_charset).unwrap_or_else(|e| fatal(e))
}

/// Fallible version of [`generate_string`].
///
/// # Errors
/// - `Error::EmptyCharset` if `custom_charset` is `Some("")` and `length > 0`.
/// - `Error::EntropyUnavailable` if the secure random source fails.
pub fn try_generate_string<L: TryInto<usize>>(length: L, custom_charset: Option<&str>) -> Result<String> {
	try_random(length, custom_charset.unwrap_or(charset::DEFAULT))
}

/// Like [`generate_string`], taking the charset from a list of candidates.
///
/// Only the first entry is used; any further entries are ignored. An empty
/// list selects the default charset.
pub fn generate_string_from<L: TryInto<usize>>(length: L, custom_charsets: &[&str]) -> String {
	generate_string(length, custom_charsets.first().copied())
}
