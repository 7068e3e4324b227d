use std::slice::ChunksExact;

/// Length of a block in the default configuration.
pub const BLOCK_LEN: usize = 6;

/// Splits `sequence` into consecutive, non-overlapping blocks of
/// `block_len` bytes.
///
/// Block `i` covers `sequence[i * block_len..(i + 1) * block_len]`. A tail
/// shorter than `block_len` is not yielded; it is available through
/// `ChunksExact::remainder`.
///
/// # Panics
///
/// Panics if `block_len` is zero.
pub fn blocks(sequence: &[u8], block_len: usize) -> ChunksExact<'_, u8> {
    assert!(block_len > 0, "block length must be positive");
    sequence.chunks_exact(block_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple() {
        let got: Vec<_> = blocks(b"AAAAAABBBBBBAAAAAA", BLOCK_LEN).collect();
        assert_eq!(got, vec![&b"AAAAAA"[..], &b"BBBBBB"[..], &b"AAAAAA"[..]]);
    }

    #[test]
    fn remainder_is_dropped() {
        let mut iter = blocks(b"ACGTACGTAC", BLOCK_LEN);
        assert_eq!(iter.next(), Some(&b"ACGTAC"[..]));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.remainder(), b"GTAC");
    }

    #[test]
    fn shorter_than_one_block() {
        assert_eq!(blocks(b"ACG", BLOCK_LEN).count(), 0);
        assert_eq!(blocks(b"", BLOCK_LEN).count(), 0);
    }
}
