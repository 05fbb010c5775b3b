use crate::{Error, RandSource, Result};
use ::rand::{TryRngCore, rngs::OsRng};

/// A `RandSource` that reads directly from the operating system CSPRNG.
///
/// Every call goes to the OS (`getrandom(2)` or the platform equivalent), so
/// no random state is cached in the process. If the OS cannot supply bytes
/// the failure is reported as [`Error::RandomnessFailure`].
///
/// This is the source used by [`crate::generate`].
#[derive(Default, Clone, Copy, Debug)]
pub struct OsRandom;

impl RandSource for OsRandom {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()> {
        let mut rng = OsRng;
        rng.try_fill_bytes(buf).map_err(|e| Error::RandomnessFailure {
            reason: e.to_string(),
        })
    }
}
