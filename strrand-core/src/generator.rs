use std::sync::mpsc;
use std::thread;

use log::{debug, error, trace};

use crate::charset::{Charset, NamedCharset};
use crate::error::{Error, Result};
use crate::sampler::{EntropySource, OsEntropy, sample_index};

/// Converts a caller supplied length into a character count.
///
/// Negative values (or anything else that does not fit in a `usize`)
/// count as zero and therefore produce an empty string.
pub(crate) fn clamp_length<L: TryInto<usize>>(length: L) -> usize {
	length.try_into().unwrap_or(0)
}

/// Aborts the calling operation after a generation failure.
///
/// Used by the infallible API: returning a partial or insecurely sourced
/// string is never an option.
pub(crate) fn fatal(err: Error) -> ! {
	error!("Random string generation failed: {err}");
	panic!("random string generation failed: {err}");
}

/// Builds a string of exactly `length` code points drawn from `charset`.
///
/// # Behavior
/// - `length == 0` returns an empty string without touching `source`,
///   even when `charset` is empty.
/// - Otherwise one index is sampled per output character, in order.
///
/// # Errors
/// - `Error::EmptyCharset` if `charset` is empty and `length > 0`.
/// - `Error::EntropyUnavailable` if `source` fails. Nothing is returned
///   in that case, not even the characters drawn so far.
pub fn build<S: EntropySource + ?Sized>(source: &mut S, length: usize, charset: &Charset) -> Result<String> {
	if length == 0 {
		return Ok(String::new());
	}
	if charset.is_empty() {
		return Err(Error::EmptyCharset);
	}
	trace!("Building {length} characters from a charset of {}", charset.len());

	let chars = charset.as_chars();
	let mut output = String::with_capacity(length);
	for _ in 0..length {
		// sample_index always returns an index below chars.len()
		output.push(chars[sample_index(source, chars.len())?]);
	}

	Ok(output)
}

/// Reusable generator bound to one charset.
///
/// The charset is decoded into code points once, at construction, so
/// repeated calls only pay for sampling. Every call reads the operating
/// system's secure random source; no state is shared between calls, and a
/// `Generator` can be used from many threads at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generator {
	charset: Charset,
}

impl Default for Generator {
	/// A generator over the default charset (base62 + special characters).
	fn default() -> Self {
		Self::from_named(NamedCharset::Default)
	}
}

impl Generator {
	/// Creates a generator over a custom charset.
	///
	/// An empty charset is accepted here; it only fails when asked for a
	/// non-empty string.
	pub fn new(charset: impl Into<Charset>) -> Self {
		Self { charset: charset.into() }
	}

	/// Creates a generator over one of the predefined charsets.
	pub fn from_named(named: NamedCharset) -> Self {
		Self::new(named)
	}

	pub fn charset(&self) -> &Charset {
		&self.charset
	}

	/// Generates a string of `length` characters.
	///
	/// # Errors
	/// See [`build`].
	pub fn try_generate<L: TryInto<usize>>(&self, length: L) -> Result<String> {
		build(&mut OsEntropy, clamp_length(length), &self.charset)
	}

	/// Generates a string of `length` characters.
	///
	/// # Panics
	/// If the secure random source is unavailable, or if the charset is
	/// empty and `length > 0`.
	pub fn generate<L: TryInto<usize>>(&self, length: L) -> String {
		self.try_generate(length).unwrap_or_else(|e| fatal(e))
	}

	/// Generates `count` independent strings of `length` characters each.
	///
	/// # Behavior
	/// - Splits `count` across up to `num_cpus` worker threads.
	/// - Each worker reads the OS random source on its own.
	/// - Results are collected over an MPSC channel; the order of the
	///   returned strings carries no meaning.
	///
	/// # Errors
	/// - `Error::EmptyCharset` if the charset is empty, `count > 0` and
	///   `length > 0`.
	/// - The first error reported by a worker otherwise.
	pub fn generate_batch<L: TryInto<usize>>(&self, count: usize, length: L) -> Result<Vec<String>> {
		let length = clamp_length(length);
		if count == 0 {
			return Ok(Vec::new());
		}
		if length > 0 && self.charset.is_empty() {
			return Err(Error::EmptyCharset);
		}

		let workers = num_cpus::get().clamp(1, count);
		let base = count / workers;
		let extra = count % workers;
		debug!("Generating {count} strings of {length} characters on {workers} threads");

		let (tx, rx) = mpsc::channel();
		let mut handles = Vec::with_capacity(workers);
		for worker in 0..workers {
			let tx = tx.clone();
			let charset = self.charset.clone();
			let share = base + usize::from(worker < extra);

			handles.push(thread::spawn(move || {
				let partial: Result<Vec<String>> = (0..share)
					.map(|_| build(&mut OsEntropy, length, &charset))
					.collect();
				// The receiver outlives every worker
				let _ = tx.send(partial);
			}));
		}
		drop(tx);

		let mut strings = Vec::with_capacity(count);
		let mut failure = None;
		for partial in rx.iter() {
			match partial {
				Ok(mut partial) => strings.append(&mut partial),
				Err(e) => {
					failure.get_or_insert(e);
				}
			}
		}

		for handle in handles {
			if let Err(payload) = handle.join() {
				std::panic::resume_unwind(payload);
			}
		}

		match failure {
			Some(e) => Err(e),
			None => Ok(strings),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::charset::{DECIMAL, HEXADECIMAL};
	use crate::sampler::tests::{FailingEntropy, ScriptedEntropy};

	#[test]
	fn test_build_follows_draws_in_order() {
		let mut source = ScriptedEntropy::new(&[3, 0, 15, 10]);
		let charset = Charset::new(HEXADECIMAL);
		assert_eq!(build(&mut source, 4, &charset).unwrap(), "30fa");
	}

	#[test]
	fn test_build_zero_length_skips_sampling() {
		// An empty script panics if any draw is made
		let mut source = ScriptedEntropy::new(&[]);
		assert_eq!(build(&mut source, 0, &Charset::new(DECIMAL)).unwrap(), "");
		assert_eq!(build(&mut source, 0, &Charset::default()).unwrap(), "");
	}

	#[test]
	fn test_build_empty_charset() {
		let mut source = ScriptedEntropy::new(&[]);
		assert!(matches!(build(&mut source, 3, &Charset::default()), Err(Error::EmptyCharset)));
	}

	#[test]
	fn test_build_multibyte_charset() {
		let mut source = ScriptedEntropy::new(&[0, 1, 2, 1]);
		let result = build(&mut source, 4, &Charset::new("é€😀")).unwrap();
		assert_eq!(result, "é€😀€");
		assert_eq!(result.chars().count(), 4);
		assert!(result.len() > 4);
	}

	#[test]
	fn test_build_fails_without_entropy() {
		let result = build(&mut FailingEntropy, 8, &Charset::new(DECIMAL));
		assert!(matches!(result, Err(Error::EntropyUnavailable(_))));
	}

	#[test]
	fn test_clamp_length() {
		assert_eq!(clamp_length(-1), 0);
		assert_eq!(clamp_length(i64::MIN), 0);
		assert_eq!(clamp_length(0u8), 0);
		assert_eq!(clamp_length(42u32), 42);
		assert_eq!(clamp_length(7usize), 7);
	}

	#[test]
	fn test_generator_output() {
		let generator = Generator::from_named(NamedCharset::Octal);
		let result = generator.generate(64);
		assert_eq!(result.chars().count(), 64);
		assert!(result.chars().all(|c| ('0'..='7').contains(&c)));
		assert_eq!(generator.generate(-5), "");
	}

	#[test]
	fn test_generator_default_charset() {
		assert_eq!(Generator::default().charset().len(), 92);
	}

	#[test]
	#[should_panic(expected = "charset is empty")]
	fn test_generate_empty_charset_panics() {
		Generator::new("").generate(1);
	}

	#[test]
	fn test_batch() {
		let generator = Generator::new("xy");
		let strings = generator.generate_batch(37, 12).unwrap();
		assert_eq!(strings.len(), 37);
		for s in &strings {
			assert_eq!(s.chars().count(), 12);
			assert!(s.chars().all(|c| c == 'x' || c == 'y'));
		}
	}

	#[test]
	fn test_batch_edge_cases() {
		let generator = Generator::new("");
		assert!(generator.generate_batch(0, 10).unwrap().is_empty());
		assert_eq!(generator.generate_batch(3, 0).unwrap(), vec![String::new(); 3]);
		assert!(matches!(generator.generate_batch(3, 1), Err(Error::EmptyCharset)));
	}
}
