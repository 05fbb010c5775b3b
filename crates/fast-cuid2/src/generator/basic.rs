#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    BASE32_CHARS_PER_CHUNK, CUID2_LENGTH, Cuid2, OsRandom, RANDOM_BYTES_LENGTH,
    RANDOM_CHUNK_SIZE, RandSource, Result, TIMESTAMP_LENGTH, TimeSource, WallClock,
    encode_base32, letter_for_digit,
};

/// A stateless CUID2 generator over a clock and a random source.
///
/// Each call reads the clock once and draws 12 fresh random bytes; nothing is
/// cached between calls, so a single generator can be shared across threads
/// whenever its sources can.
///
/// ## Features
/// - ✅ Thread-safe (with `Sync` sources)
/// - ✅ Probabilistically unique (no coordination required)
/// - ✅ Coarsely time-prefixed (the prefix wraps every ~12.4 days)
///
/// ## Recommended When
/// - You need to inject the clock or random source, e.g. in tests
///
/// ## See Also
/// - [`generate`] for the default system sources
///
/// [`generate`]: crate::generate
#[derive(Clone, Debug)]
pub struct Cuid2Generator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    time: T,
    rng: R,
}

impl Default for Cuid2Generator<WallClock, OsRandom> {
    /// Uses the system wall clock and the operating system CSPRNG.
    fn default() -> Self {
        Self::new(WallClock, OsRandom)
    }
}

impl<T, R> Cuid2Generator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a new [`Cuid2Generator`] with the provided time source and RNG.
    ///
    /// # Parameters
    /// - `time`: A [`TimeSource`] used to retrieve the current timestamp
    /// - `rng`: A [`RandSource`] used to generate random bytes
    ///
    /// # Example
    /// ```
    /// use fast_cuid2::{Cuid2Generator, ThreadRandom, WallClock};
    ///
    /// let generator = Cuid2Generator::new(WallClock, ThreadRandom);
    /// let id = generator.try_next_id().unwrap();
    /// assert!(fast_cuid2::is_valid(id.as_str()));
    /// ```
    pub const fn new(time: T, rng: R) -> Self {
        Self { time, rng }
    }

    /// Returns a reference to the time source.
    pub const fn time(&self) -> &T {
        &self.time
    }

    /// Returns a reference to the random source.
    pub const fn rng(&self) -> &R {
        &self.rng
    }

    /// Generates a new identifier.
    ///
    /// # Errors
    /// - [`crate::Error::ClockFailure`] if the clock cannot be read
    /// - [`crate::Error::RandomnessFailure`] if the random source fails
    ///
    /// Either failure is returned immediately; there is no retry.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_next_id(&self) -> Result<Cuid2> {
        let timestamp = self.time.current_millis().inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_e, "clock read failed");
        })?;

        let mut random = [0_u8; RANDOM_BYTES_LENGTH];
        self.rng.fill_bytes(&mut random).inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_e, "random source failed");
        })?;

        Ok(from_parts(timestamp, &random))
    }
}

/// Assembles an identifier from a millisecond timestamp and 12 random bytes.
///
/// This is the deterministic half of generation:
///
/// 1. The timestamp is encoded into the first 6 characters, keeping only its
///    low 30 bits.
/// 2. Each pair of random bytes forms a big-endian 16-bit value that is
///    encoded into 3 characters. Three characters hold 15 bits, so the top
///    bit of every pair is dropped.
/// 3. If the first character came out as a digit, it is shifted onto the
///    letter at `ALPHABET[10 + digit]`.
///
/// ```
/// use fast_cuid2::from_parts;
///
/// let id = from_parts(0, &[0; 12]);
/// assert_eq!(id.as_str(), "a00000000000000000000000");
/// ```
pub fn from_parts(timestamp: u64, random: &[u8; RANDOM_BYTES_LENGTH]) -> Cuid2 {
    let mut buf = [0_u8; CUID2_LENGTH];
    let (ts, rest) = buf.split_at_mut(TIMESTAMP_LENGTH);

    encode_base32(timestamp, ts);

    for (pair, out) in random
        .chunks_exact(RANDOM_CHUNK_SIZE)
        .zip(rest.chunks_exact_mut(BASE32_CHARS_PER_CHUNK))
    {
        let chunk = u16::from_be_bytes([pair[0], pair[1]]);
        encode_base32(u64::from(chunk), out);
    }

    buf[0] = letter_for_digit(buf[0]);

    Cuid2::from_array_unchecked(buf)
}
