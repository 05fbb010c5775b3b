use crate::{Error, Result};
use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

/// A trait for wall-clock sources returning milliseconds since the Unix epoch.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests. A clock that cannot be read reports
/// [`Error::ClockFailure`].
///
/// # Example
///
/// ```
/// use fast_cuid2::{Result, TimeSource};
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> Result<u64> {
///         Ok(1234)
///     }
/// }
///
/// assert_eq!(FixedTime.current_millis().unwrap(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the Unix epoch.
    ///
    /// # Errors
    /// - [`Error::ClockFailure`] if the clock cannot be read.
    fn current_millis(&self) -> Result<u64>;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_millis(&self) -> Result<u64> {
        (**self).current_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn current_millis(&self) -> Result<u64> {
        (**self).current_millis()
    }
}

/// The real-time system clock.
///
/// Reads `SystemTime::now()` on every call, so timestamps follow wall-clock
/// adjustments (NTP, manual changes). A clock set before 1970 cannot be
/// represented and surfaces as [`Error::ClockFailure`].
#[derive(Default, Clone, Copy, Debug)]
pub struct WallClock;

impl TimeSource for WallClock {
    fn current_millis(&self) -> Result<u64> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| Error::ClockFailure {
                reason: e.to_string(),
            })?;
        // Only the low bits survive encoding, so wrapping is harmless
        Ok(now
            .as_secs()
            .wrapping_mul(1000)
            .wrapping_add(u64::from(now.subsec_millis())))
    }
}
