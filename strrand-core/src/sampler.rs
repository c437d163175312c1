use log::debug;
use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::{Error, Result};

/// Size of a single draw, interpreted as a big-endian `u32`.
const DRAW_SIZE: usize = 4;

/// A source of cryptographically secure random bytes.
///
/// Implementations must either fill the whole buffer or fail; a partial
/// fill is never reported as success.
pub trait EntropySource {
	/// Fills `buf` entirely with random bytes.
	///
	/// # Errors
	/// Returns `Error::EntropyUnavailable` if the source cannot be read.
	fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
	fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
		(**self).fill(buf)
	}
}

/// The operating system's secure random source (`getrandom` and friends).
///
/// Stateless: every call goes straight to the OS, so instances are free to
/// create and safe to use from any thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
	fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
		OsRng
			.try_fill_bytes(buf)
			.map_err(|e| Error::EntropyUnavailable(Box::new(e)))
	}
}

/// Draws 4 bytes from `source` and reads them as a big-endian `u32`.
pub fn next_u32<S: EntropySource + ?Sized>(source: &mut S) -> Result<u32> {
	let mut bytes = [0u8; DRAW_SIZE];
	source.fill(&mut bytes)?;
	Ok(u32::from_be_bytes(bytes))
}

/// Draws a uniformly distributed index in `[0, n)`.
///
/// Each attempt reads one big-endian `u32` and reduces it modulo `n`.
/// Draws falling in the incomplete top block of the `u32` range
/// (`>= 2^32 - 2^32 % n`) are discarded and redrawn, so every index has
/// exactly the same probability. For charset sizes below a hundred the
/// retry rate is under one in forty million.
///
/// # Errors
/// - `Error::EmptyCharset` if `n == 0`.
/// - `Error::CharsetTooLarge` if `n` does not fit in a `u32`.
/// - `Error::EntropyUnavailable` if `source` fails.
pub fn sample_index<S: EntropySource + ?Sized>(source: &mut S, n: usize) -> Result<usize> {
	if n == 0 {
		return Err(Error::EmptyCharset);
	}
	let n = u64::from(u32::try_from(n).map_err(|_| Error::CharsetTooLarge(n))?);

	const RANGE: u64 = 1 << 32;
	let zone = RANGE - RANGE % n;

	loop {
		let draw = u64::from(next_u32(source)?);
		if draw < zone {
			// draw % n < n <= u32::MAX, cannot truncate
			return Ok((draw % n) as usize);
		}
		debug!("Rejected biased draw {draw} for charset of size {n}");
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use std::collections::VecDeque;
	use std::io;

	/// Replays a fixed list of `u32` words as big-endian bytes.
	pub(crate) struct ScriptedEntropy {
		words: VecDeque<u32>,
	}

	impl ScriptedEntropy {
		pub(crate) fn new(words: &[u32]) -> Self {
			Self { words: words.iter().copied().collect() }
		}
	}

	impl EntropySource for ScriptedEntropy {
		fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
			assert_eq!(buf.len(), DRAW_SIZE, "draws are always 4 bytes");
			let word = self.words.pop_front().expect("script exhausted");
			buf.copy_from_slice(&word.to_be_bytes());
			Ok(())
		}
	}

	/// Fails every read, like a denied `getrandom` syscall.
	pub(crate) struct FailingEntropy;

	impl EntropySource for FailingEntropy {
		fn fill(&mut self, _buf: &mut [u8]) -> Result<()> {
			Err(Error::EntropyUnavailable(Box::new(io::Error::new(
				io::ErrorKind::PermissionDenied,
				"entropy pool unavailable",
			))))
		}
	}

	#[test]
	fn test_reads_big_endian() {
		struct Bytes;
		impl EntropySource for Bytes {
			fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
				buf.copy_from_slice(&[0x01, 0x02, 0x03, 0x04]);
				Ok(())
			}
		}

		assert_eq!(next_u32(&mut Bytes).unwrap(), 0x0102_0304);
	}

	#[test]
	fn test_reduces_modulo() {
		let mut source = ScriptedEntropy::new(&[0, 1, 9, 10, 123_456_789]);
		let picks: Vec<usize> = (0..5).map(|_| sample_index(&mut source, 10).unwrap()).collect();
		assert_eq!(picks, vec![0, 1, 9, 0, 9]);
	}

	#[test]
	fn test_rejects_biased_tail() {
		// 2^32 % 10 == 6, so the last six values are rejected.
		let mut source = ScriptedEntropy::new(&[u32::MAX, u32::MAX - 5, u32::MAX - 6]);
		// u32::MAX - 6 == 4294967289, which is 9 mod 10
		assert_eq!(sample_index(&mut source, 10).unwrap(), 9);
	}

	#[test]
	fn test_power_of_two_never_rejects() {
		let mut source = ScriptedEntropy::new(&[u32::MAX]);
		assert_eq!(sample_index(&mut source, 16).unwrap(), 15);
	}

	#[test]
	fn test_single_entry_always_zero() {
		let mut source = ScriptedEntropy::new(&[u32::MAX, 7]);
		assert_eq!(sample_index(&mut source, 1).unwrap(), 0);
		assert_eq!(sample_index(&mut source, 1).unwrap(), 0);
	}

	#[test]
	fn test_empty_charset_is_an_error() {
		let mut source = ScriptedEntropy::new(&[]);
		assert!(matches!(sample_index(&mut source, 0), Err(Error::EmptyCharset)));
	}

	#[test]
	fn test_entropy_failure_propagates() {
		assert!(matches!(sample_index(&mut FailingEntropy, 10), Err(Error::EntropyUnavailable(_))));
	}

	#[test]
	fn test_os_entropy_fills_buffer() {
		let mut a = [0u8; 32];
		let mut b = [0u8; 32];
		OsEntropy.fill(&mut a).unwrap();
		OsEntropy.fill(&mut b).unwrap();
		assert_ne!(a, b);
	}

	#[test]
	fn test_os_entropy_stays_in_range() {
		for _ in 0..1_000 {
			assert!(sample_index(&mut OsEntropy, 62).unwrap() < 62);
		}
	}
}
