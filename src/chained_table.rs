use crate::hash::TABLE_SIZE;
use crate::traits::Key;
use serde::Serialize;
use smallvec::SmallVec;
use std::borrow::Borrow;

/// Indices into `ChainedTable::entries`, oldest first. Read back to front
/// so the newest entry is the head of the chain.
type Chain = SmallVec<[u32; 2]>;

/// Hash table with a fixed number of buckets and chained collision
/// resolution that remembers the order in which keys were first inserted.
///
/// Entries are stored once, in first-seen order. Each bucket holds the
/// indices of the entries hashing to it, most recently inserted at the head.
/// The bucket array is never resized: a crowded table only gets longer
/// chains.
pub struct ChainedTable<K: Key, V> {
    chains: Box<[Chain]>,
    entries: Vec<(K, V)>,
}

impl<K: Key, V> ChainedTable<K, V> {
    pub fn new() -> Self {
        Self::with_buckets(TABLE_SIZE)
    }

    /// # Panics
    ///
    /// Panics if `buckets` is zero or does not fit in a `u32`.
    pub fn with_buckets(buckets: usize) -> Self {
        assert!(
            buckets > 0 && buckets <= u32::MAX as usize,
            "bucket count out of range: {buckets}"
        );
        Self {
            chains: std::iter::repeat_with(Chain::new).take(buckets).collect(),
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn buckets(&self) -> usize {
        self.chains.len()
    }

    fn find<Q>(&self, bucket: usize, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        self.chains[bucket]
            .iter()
            .rev()
            .map(|&index| index as usize)
            .find(|&index| <K as Borrow<Q>>::borrow(&self.entries[index].0) == key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        let index = self.find(key.bucket(self.buckets()), key)?;
        Some(&self.entries[index].1)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        let index = self.find(key.bucket(self.buckets()), key)?;
        Some(&mut self.entries[index].1)
    }

    /// Inserts `key` with `value` unless an equal key is already present.
    ///
    /// Returns `Ok` with the freshly stored value for a new key, or `Err`
    /// with the existing value, in which case `value` is dropped and the
    /// chain is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if the table already holds `u32::MAX` entries.
    pub fn insert(&mut self, key: K, value: V) -> Result<&mut V, &mut V> {
        let bucket = key.bucket(self.buckets());
        if let Some(index) = self.find(bucket, &key) {
            return Err(&mut self.entries[index].1);
        }
        let index = u32::try_from(self.entries.len())
            .unwrap_or_else(|_| panic!("the chained table overflows"));
        self.chains[bucket].push(index);
        self.entries.push((key, value));
        Ok(&mut self.entries[index as usize].1)
    }

    /// Iterates entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Iterates the keys chained at `bucket`, head first.
    ///
    /// # Panics
    ///
    /// Panics if `bucket >= self.buckets()`.
    pub fn chain(&self, bucket: usize) -> impl Iterator<Item = &K> + '_ {
        self.chains[bucket]
            .iter()
            .rev()
            .map(move |&index| &self.entries[index as usize].0)
    }

    pub fn stats(&self) -> TableStats {
        let occupied = self.chains.iter().filter(|chain| !chain.is_empty()).count();
        let longest_chain = self.chains.iter().map(|chain| chain.len()).max().unwrap_or(0);
        TableStats {
            entries: self.len(),
            buckets: self.buckets(),
            occupied,
            longest_chain,
            load_factor: self.len() as f64 / self.buckets() as f64,
        }
    }
}

impl<K: Key, V> Default for ChainedTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shape of a table's buckets at one point in time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableStats {
    pub entries: usize,
    pub buckets: usize,
    pub occupied: usize,
    pub longest_chain: usize,
    pub load_factor: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_increment() {
        let mut table = ChainedTable::<[u8; 3], u64>::new();
        assert!(table.is_empty());
        assert_eq!(table.insert(*b"ACG", 1), Ok(&mut 1));
        match table.insert(*b"ACG", 1) {
            Ok(_) => panic!("key inserted twice"),
            Err(count) => *count += 1,
        }
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(b"ACG"), Some(&2));
        assert_eq!(table.get(&b"ACG"[..]), Some(&2));
        assert_eq!(table.get(b"TTT"), None);
    }

    #[test]
    fn chains_are_newest_first() {
        let mut table = ChainedTable::<[u8; 2], ()>::with_buckets(1);
        for key in [*b"AA", *b"BB", *b"CC"] {
            assert!(table.insert(key, ()).is_ok());
        }
        assert!(table.insert(*b"BB", ()).is_err());
        let chain: Vec<_> = table.chain(0).copied().collect();
        assert_eq!(chain, vec![*b"CC", *b"BB", *b"AA"]);
        let order: Vec<_> = table.iter().map(|(key, _)| *key).collect();
        assert_eq!(order, vec![*b"AA", *b"BB", *b"CC"]);
    }

    #[test]
    fn colliding_keys_are_counted_independently() {
        let mut table = ChainedTable::<[u8; 6], u64>::new();
        let first = *b"ABAAAA";
        let second = *b"`AAAAA";
        let bucket = first.bucket(table.buckets());
        assert_eq!(bucket, second.bucket(table.buckets()));
        for key in [first, second, second, first, second] {
            if let Err(count) = table.insert(key, 1) {
                *count += 1;
            }
        }
        assert_eq!(table.get(&first), Some(&2));
        assert_eq!(table.get(&second), Some(&3));
        assert_eq!(table.chain(bucket).count(), 2);
    }

    #[test]
    fn stats_follow_chains() {
        let mut table = ChainedTable::<[u8; 1], u8>::with_buckets(4);
        assert_eq!(table.stats().longest_chain, 0);
        // 'A'..='E' hash to 1, 2, 3, 0, 1
        for key in [*b"A", *b"B", *b"C", *b"D", *b"E"] {
            assert!(table.insert(key, 0).is_ok());
        }
        let stats = table.stats();
        assert_eq!(stats.entries, 5);
        assert_eq!(stats.buckets, 4);
        assert_eq!(stats.occupied, 4);
        assert_eq!(stats.longest_chain, 2);
        assert_eq!(stats.load_factor, 1.25);
        let chain: Vec<_> = table.chain(1).copied().collect();
        assert_eq!(chain, vec![*b"E", *b"A"]);
    }

    #[test]
    fn long_chain_keeps_head_order() {
        let mut table = ChainedTable::<[u8; 2], usize>::with_buckets(1);
        let keys: Vec<[u8; 2]> = (0..100u8).map(|i| [b'A' + i % 26, b'A' + i / 26]).collect();
        for (i, &key) in keys.iter().enumerate() {
            assert_eq!(table.insert(key, i).map(|v| *v), Ok(i));
        }
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(table.get(key), Some(&i));
            assert_eq!(table.insert(*key, 0).map(|v| *v).map_err(|v| *v), Err(i));
        }
        let chain: Vec<_> = table.chain(0).copied().collect();
        let newest_first: Vec<_> = keys.iter().rev().copied().collect();
        assert_eq!(chain, newest_first);
        assert_eq!(table.stats().longest_chain, 100);
    }

    #[test]
    #[should_panic]
    fn zero_buckets() {
        ChainedTable::<Box<[u8]>, u64>::with_buckets(0);
    }
}
