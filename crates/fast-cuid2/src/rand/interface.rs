use crate::Result;
use std::sync::Arc;

/// A trait for sources of cryptographically secure random bytes.
///
/// This abstraction allows you to plug in the operating system RNG, a
/// thread-local CSPRNG, or a mocked source in tests.
///
/// # Example
/// ```
/// use fast_cuid2::{RandSource, Result};
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn fill_bytes(&self, buf: &mut [u8]) -> Result<()> {
///         buf.fill(0xAB);
///         Ok(())
///     }
/// }
///
/// let mut buf = [0_u8; 4];
/// FixedRand.fill_bytes(&mut buf).unwrap();
/// assert_eq!(buf, [0xAB; 4]);
/// ```
pub trait RandSource {
    /// Fills `buf` entirely with random bytes.
    ///
    /// # Errors
    /// - [`crate::Error::RandomnessFailure`] if the source cannot supply
    ///   bytes. Implementations must not fall back to a weaker source.
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()>;
}

impl<R: RandSource + ?Sized> RandSource for &R {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(buf)
    }
}

impl<R: RandSource + ?Sized> RandSource for Arc<R> {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(buf)
    }
}
