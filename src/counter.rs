use crate::blocks::blocks;
use crate::chained_table::{ChainedTable, TableStats};
use crate::hash::TABLE_SIZE;
use log::{info, trace, warn};

/// Occurrence counts of blocks, reported in first-seen order.
pub struct BlockCounter {
    table: ChainedTable<Box<[u8]>, u64>,
    total: u64,
}

impl BlockCounter {
    pub fn new() -> Self {
        Self::with_buckets(TABLE_SIZE)
    }

    pub fn with_buckets(buckets: usize) -> Self {
        Self {
            table: ChainedTable::with_buckets(buckets),
            total: 0,
        }
    }

    /// Counts every complete `block_len` block of `sequence`.
    pub fn from_sequence(sequence: &[u8], block_len: usize, buckets: usize) -> Self {
        let mut counter = Self::with_buckets(buckets);
        let mut iter = blocks(sequence, block_len);
        for block in iter.by_ref() {
            counter.insert_or_increment(block);
        }
        let remainder = iter.remainder();
        if !remainder.is_empty() {
            warn!(
                "dropping {} trailing bytes shorter than a {block_len}-byte block",
                remainder.len()
            );
        }
        info!(
            "counted {} blocks, {} distinct",
            counter.total(),
            counter.distinct()
        );
        counter
    }

    /// Records one occurrence of `block` and returns its updated count.
    pub fn insert_or_increment(&mut self, block: &[u8]) -> u64 {
        self.total += 1;
        match self.table.insert(block.into(), 1) {
            Ok(count) => {
                trace!("new block {:?}", String::from_utf8_lossy(block));
                *count
            }
            Err(count) => {
                *count += 1;
                *count
            }
        }
    }

    /// Occurrences of `block` so far, zero if it was never seen.
    pub fn count(&self, block: &[u8]) -> u64 {
        self.table.get(block).copied().unwrap_or(0)
    }

    /// Number of blocks recorded, duplicates included.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct blocks.
    pub fn distinct(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterates `(block, count)` in the order blocks were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], u64)> + '_ {
        self.table.iter().map(|(block, &count)| (&**block, count))
    }

    pub fn stats(&self) -> TableStats {
        self.table.stats()
    }

    pub fn table(&self) -> &ChainedTable<Box<[u8]>, u64> {
        &self.table
    }
}

impl Default for BlockCounter {
    fn default() -> Self {
        Self::new()
    }
}
