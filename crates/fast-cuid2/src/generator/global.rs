//! Default generation entry point.
//!
//! The default sources are zero-sized and stateless, so there is no global
//! generator to initialise; each call builds one on the stack.
//!
//! # Example
//! ```rust
//! let id = fast_cuid2::generate().unwrap();
//! println!("CUID2: {id}");
//! ```

use crate::{Cuid2, Cuid2Generator, Result};

/// Generates an identifier from the system wall clock and the operating system
/// CSPRNG.
///
/// Safe to call concurrently from any number of threads without
/// coordination.
///
/// # Errors
/// - [`crate::Error::ClockFailure`] if the system clock cannot be read
/// - [`crate::Error::RandomnessFailure`] if the OS cannot supply random bytes
///
/// # Example
/// ```rust
/// let id = fast_cuid2::generate().unwrap();
/// assert_eq!(id.as_str().len(), fast_cuid2::CUID2_LENGTH);
/// ```
pub fn generate() -> Result<Cuid2> {
    Cuid2Generator::default().try_next_id()
}
