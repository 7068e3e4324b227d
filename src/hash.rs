/// Bucket count of the default table. Prime, so runs of similar blocks
/// spread across the whole array.
pub const TABLE_SIZE: usize = 1009;

pub const RADIX: i64 = 31;

/// Alphabet position of a character: `'A'` is 1, `'Z'` is 26.
///
/// Bytes are read as signed characters, so anything outside `'A'..='Z'`
/// lands outside `1..=26` (digits and bytes >= 0x80 go negative, lowercase
/// letters go above 26). Callers reduce the result themselves.
#[inline(always)]
pub fn char_value(c: u8) -> i64 {
    c as i8 as i64 - b'A' as i64 + 1
}

/// Polynomial hash of `bytes` reduced into `0..buckets`.
///
/// `hash = sum(value(c_i) * 31^i) mod buckets`, with both the running hash
/// and the running power reduced after every step. Euclidean remainder keeps
/// every intermediate in `0..buckets`, which makes negative character values
/// safe to index with.
///
/// `buckets` must be in `1..=u32::MAX`.
#[inline]
pub fn polynomial_hash(bytes: &[u8], buckets: usize) -> usize {
    debug_assert!(buckets > 0 && buckets <= u32::MAX as usize);
    let modulus = buckets as i64;
    let mut hash = 0i64;
    let mut power = 1i64;
    for &c in bytes {
        hash = (hash + char_value(c) * power).rem_euclid(modulus);
        power = (power * RADIX).rem_euclid(modulus);
    }
    hash as usize
}
