//! # fast-cuid2
//!
//! Fixed-length, URL-safe identifiers in the CUID2 style: a 6 character
//! millisecond timestamp prefix followed by 18 characters drawn from 12
//! cryptographically secure random bytes, all encoded with a readability
//! optimized base32 alphabet (`0-9a-z` without `i`, `l`, `o`, `u`).
//!
//! Every identifier starts with a letter, so it can never be mistaken for a
//! number.
//!
//! ```
//! let id = fast_cuid2::generate().unwrap();
//! assert_eq!(id.as_str().len(), 24);
//! assert!(fast_cuid2::is_valid(id.as_str()));
//! assert!(!fast_cuid2::is_valid("0123456789abcdefghjkmnpq"));
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialize [`Cuid2`] as its string form.
//! - `tracing`: instrument the generation path with `tracing` spans.

mod base32;
mod error;
mod generator;
mod id;
mod rand;
#[cfg(feature = "serde")]
mod serde;
mod time;

pub use crate::base32::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::rand::*;
pub use crate::time::*;
