/// ULID-style row identifiers.
///
/// 26-character Crockford base32 string: a 48-bit millisecond timestamp
/// (10 chars) followed by 80 random bits (16 chars). Lexicographic order
/// matches generation order across millisecond boundaries. There is no
/// uniqueness guarantee — identifiers are never deduplicated, and two
/// generators drawing the same random bits in the same millisecond collide.
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

/// Crockford base32 alphabet: digits plus uppercase letters without I, L, O, U.
pub const CROCKFORD: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

const TIME_LEN: usize = 10;
const RAND_LEN: usize = 16;
const TIME_MASK: u64 = (1u64 << 48) - 1;
const RAND_MASK: u128 = (1u128 << 80) - 1;

/// Encode the low `length * 5` bits of `value`, most-significant symbol first.
/// Values smaller than the field capacity come out zero-padded on the left.
pub fn encode_base32(mut value: u128, length: usize) -> String {
    let mut buf = vec![0u8; length];
    for slot in buf.iter_mut().rev() {
        *slot = CROCKFORD[(value & 0x1F) as usize];
        value >>= 5;
    }
    buf.iter().map(|&b| b as char).collect()
}

/// Assemble an identifier from explicit parts. Inputs are masked to 48 and
/// 80 bits respectively, so an out-of-range timestamp wraps rather than errors.
pub fn from_parts(ts_ms: u64, rand_bits: u128) -> String {
    let mut id = encode_base32((ts_ms & TIME_MASK) as u128, TIME_LEN);
    id.push_str(&encode_base32(rand_bits & RAND_MASK, RAND_LEN));
    id
}

/// Generate one identifier from the wall clock and 80 bits drawn from `rng`.
pub fn generate(rng: &mut impl Rng) -> String {
    let ts_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;
    let rand_bits = ((rng.random::<u16>() as u128) << 64) | rng.random::<u64>() as u128;
    from_parts(ts_ms, rand_bits)
}
