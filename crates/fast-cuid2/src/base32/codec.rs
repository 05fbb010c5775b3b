/// The base32 alphabet: digits followed by lowercase letters, excluding `i`,
/// `l`, `o` and `u`.
pub const ALPHABET: &[u8; 32] = b"0123456789abcdefghjkmnpqrstvwxyz";

/// Number of bits carried by a single output character.
pub const BITS_PER_CHAR: usize = 5;

const NO_VALUE: u8 = 255;
const MASK: u64 = 0x1F;
const DIGITS: usize = 10;

/// Lookup table from byte to alphabet index
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 32 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

/// Encodes the low `buf.len() * 5` bits of `num` into `buf`, most significant
/// group first.
///
/// The buffer is filled right-to-left, so the last character holds the least
/// significant 5 bits. Bits of `num` that do not fit are silently dropped;
/// this truncation is relied on when encoding millisecond timestamps into six
/// characters.
///
/// ```
/// use fast_cuid2::encode_base32;
///
/// let mut buf = [0_u8; 3];
/// encode_base32(0xFFFF, &mut buf);
/// assert_eq!(&buf, b"zzz");
/// ```
#[inline]
pub fn encode_base32(mut num: u64, buf: &mut [u8]) {
    for slot in buf.iter_mut().rev() {
        *slot = ALPHABET[(num & MASK) as usize];
        num >>= BITS_PER_CHAR;
    }
}

/// Encodes `num` into a `length` character string.
///
/// Allocating counterpart to [`encode_base32`], with the same truncation
/// rule.
///
/// ```
/// use fast_cuid2::encode;
///
/// assert_eq!(encode(0x1F, 1), "z");
/// assert_eq!(encode(32, 1), "0");
/// assert_eq!(encode(32, 2), "10");
/// ```
pub fn encode(num: u64, length: usize) -> String {
    let mut buf = vec![0_u8; length];
    encode_base32(num, &mut buf);
    buf.into_iter().map(char::from).collect()
}

/// Returns the alphabet index of `byte`, or `None` if it is not a member.
#[inline]
pub const fn alphabet_index(byte: u8) -> Option<u8> {
    match LOOKUP[byte as usize] {
        NO_VALUE => None,
        idx => Some(idx),
    }
}

/// Returns `true` if `byte` belongs to the alphabet.
///
/// Uppercase letters, the excluded letters and anything non-ASCII are not
/// members.
#[inline]
pub const fn is_alphabet_byte(byte: u8) -> bool {
    LOOKUP[byte as usize] != NO_VALUE
}

/// Returns `true` for the ASCII digits `0` through `9`.
#[inline]
pub const fn is_digit_byte(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Maps a digit onto a letter by indexing the alphabet at `10 + digit`.
///
/// Non-digits are returned unchanged. The mapping is deterministic, so `'0'`
/// always becomes `'a'` and `'9'` always becomes `'k'`.
#[inline]
pub const fn letter_for_digit(byte: u8) -> u8 {
    if is_digit_byte(byte) {
        ALPHABET[DIGITS + (byte - b'0') as usize]
    } else {
        byte
    }
}
