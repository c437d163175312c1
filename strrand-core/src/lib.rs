//! Cryptographically secure random string generation.
//!
//! This crate builds strings of an exact length from a character set:
//! - Predefined charsets (binary, hexadecimal, base62, base64, ...)
//! - Custom charsets, measured in Unicode code points
//! - Uniform sampling from the operating system's secure random source
//! - Batch generation across worker threads
//!
//! The quickest entry points are the helpers re-exported at the crate root:
//!
//! ```
//! let token = strrand_core::base62(24);
//! assert_eq!(token.len(), 24);
//!
//! let pin = strrand_core::generate_string(6, Some("0123456789"));
//! assert!(pin.chars().all(|c| c.is_ascii_digit()));
//! ```

/// Predefined charsets and the `Charset` value type.
pub mod charset;

/// Error type shared by every fallible operation.
pub mod error;

/// String building from a charset, and the reusable `Generator`.
///
/// Handles both single strings and multithreaded batches.
pub mod generator;

/// Deserializable generation requests.
pub mod input;

/// Convenience helpers, one per predefined charset.
pub mod random;

/// Secure random source and uniform index sampling.
///
/// Exposes the `EntropySource` seam so callers can plug another secure
/// source (an HSM, a test double).
pub mod sampler;

pub use charset::{Charset, NamedCharset};
pub use error::{Error, Result};
pub use generator::Generator;
pub use input::{CharsetChoice, GenerationInput};
pub use random::*;
