/// A result type defaulting to the crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors that can surface while generating an identifier.
///
/// Both variants are treated as fatal at this layer: they are returned to the
/// caller immediately and never retried or papered over with a weaker source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The cryptographically secure random source could not supply bytes.
    #[error("failed to generate secure random bytes: {reason}")]
    RandomnessFailure {
        /// Description reported by the underlying source.
        reason: String,
    },

    /// The system clock could not be read.
    #[error("failed to get system time: {reason}")]
    ClockFailure {
        /// Description reported by the underlying clock.
        reason: String,
    },
}

impl Error {
    /// Returns `true` if the random source failed.
    pub const fn is_randomness_failure(&self) -> bool {
        matches!(self, Self::RandomnessFailure { .. })
    }

    /// Returns `true` if the clock failed.
    pub const fn is_clock_failure(&self) -> bool {
        matches!(self, Self::ClockFailure { .. })
    }
}

/// Reasons a string is not a well-formed identifier.
///
/// Checks run in a fixed order (length, alphabet, leading character), so the
/// first failing check is the one reported.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The input is not exactly [`crate::CUID2_LENGTH`] bytes long.
    #[error("invalid length: {len}")]
    InvalidLength {
        /// Length of the input in bytes.
        len: usize,
    },

    /// A byte outside the base32 alphabet was found.
    #[error("invalid byte {byte:#04x} at index {index}")]
    InvalidByte {
        /// The offending byte.
        byte: u8,
        /// Its position in the input.
        index: usize,
    },

    /// The first character is a digit.
    #[error("leading character must be a letter, got '{}'", as_char(.byte))]
    LeadingDigit {
        /// The leading digit.
        byte: u8,
    },
}

fn as_char(byte: &u8) -> char {
    char::from(*byte)
}
