use crate::hash::polynomial_hash;

/// A key the chained table can place into a bucket.
///
/// Owned and borrowed forms of the same bytes must agree on `as_bytes`, so
/// a `Box<[u8]>` stored in the table is found again through a `&[u8]`.
pub trait Key: Eq {
    fn as_bytes(&self) -> &[u8];

    #[inline(always)]
    fn bucket(&self, buckets: usize) -> usize {
        polynomial_hash(self.as_bytes(), buckets)
    }
}

impl Key for [u8] {
    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl Key for Box<[u8]> {
    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> Key for [u8; N] {
    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        self
    }
}
