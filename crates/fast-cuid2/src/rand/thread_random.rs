use crate::{RandSource, Result};
use ::rand::{RngCore, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and seeded from
/// the OS then reseeded periodically. It trades a syscall per identifier for a
/// userspace CSPRNG, which pays off when generating in tight loops.
///
/// Each OS thread has its own RNG instance, so calls from multiple threads are
/// contention-free. This type does **not** store the RNG itself; it accesses
/// the thread-local generator on each call, so it is `Send + Sync` and may be
/// shared freely.
///
/// ⚠️ NOTE: `rand` panics rather than erroring if the thread-local generator
/// cannot be seeded from the OS. Use [`crate::OsRandom`] where that failure
/// must surface as an error.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()> {
        rng().fill_bytes(buf);
        Ok(())
    }
}
