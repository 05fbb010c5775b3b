use crate::{ParseError, validate};
use core::{fmt, str::FromStr};

/// Total length of an identifier in characters.
pub const CUID2_LENGTH: usize = 24;
/// Length of the timestamp prefix in characters.
pub const TIMESTAMP_LENGTH: usize = 6;
/// Number of random bytes consumed per identifier.
pub const RANDOM_BYTES_LENGTH: usize = 12;
/// Random bytes are combined in pairs into a 16-bit chunk.
pub const RANDOM_CHUNK_SIZE: usize = 2;
/// Characters produced from each random chunk.
pub const BASE32_CHARS_PER_CHUNK: usize = 3;

/// A 24 character collision-resistant identifier.
///
/// Layout:
///
/// ```text
///  Char:  0      6                  24
///         [ ts  ][      random      ]
///          6 ch         18 ch
/// ```
///
/// - 6 characters of millisecond timestamp (low 30 bits, most significant
///   first)
/// - 18 characters drawn from 12 random bytes
///
/// A `Cuid2` always upholds the format: every character is in
/// [`crate::ALPHABET`] and the first character is a letter. Values are
/// produced by [`crate::Cuid2Generator`] or parsed from strings that pass
/// [`validate`].
///
/// Ordering and hashing operate on the string form.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cuid2([u8; CUID2_LENGTH]);

impl Cuid2 {
    /// Wraps bytes already known to satisfy the format.
    pub(crate) const fn from_array_unchecked(bytes: [u8; CUID2_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Returns the identifier as a string slice.
    pub const fn as_str(&self) -> &str {
        // SAFETY: every byte is drawn from the ASCII alphabet, enforced at
        // construction
        unsafe { core::str::from_utf8_unchecked(&self.0) }
    }

    /// Returns the raw ASCII bytes.
    pub const fn as_bytes(&self) -> &[u8; CUID2_LENGTH] {
        &self.0
    }

    /// The 6 character timestamp prefix.
    ///
    /// Note that the first character may have been remapped from a digit to a
    /// letter, so this is not an exact encoding of the timestamp.
    pub fn timestamp_segment(&self) -> &str {
        &self.as_str()[..TIMESTAMP_LENGTH]
    }

    /// The 18 character random suffix.
    pub fn random_segment(&self) -> &str {
        &self.as_str()[TIMESTAMP_LENGTH..]
    }
}

impl fmt::Display for Cuid2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Cuid2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cuid2").field(&self.as_str()).finish()
    }
}

impl AsRef<str> for Cuid2 {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Cuid2 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)?;
        let mut bytes = [0_u8; CUID2_LENGTH];
        bytes.copy_from_slice(s.as_bytes());
        Ok(Self(bytes))
    }
}

impl TryFrom<&str> for Cuid2 {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Cuid2> for String {
    fn from(id: Cuid2) -> Self {
        id.as_str().to_owned()
    }
}

impl PartialEq<str> for Cuid2 {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Cuid2 {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
