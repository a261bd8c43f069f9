//! ChainedHashMap: integer-keyed map with singly linked bucket chains.

use crate::bucket_key::BucketKey;
use crate::error::{Error, Result};
use core::fmt;
use core::iter::FusedIterator;
use core::mem;
use log::{debug, trace};
use slotmap::{DefaultKey, SlotMap};

/// Bucket count used by [`ChainedHashMap::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Resize once `len / capacity >= MAX_LOAD_NUM / MAX_LOAD_DEN`.
pub const MAX_LOAD_NUM: usize = 1;
pub const MAX_LOAD_DEN: usize = 2;

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    next: Option<DefaultKey>,
}

/// Separate-chaining hash map.
///
/// Each bucket holds the head of a singly linked chain; entries live in a
/// generational arena and link to their successor by arena key. Inserting a
/// new key appends to the tail of its chain, and once the load factor
/// reaches one half the bucket array doubles and every chain is rebuilt in
/// order.
pub struct ChainedHashMap<K = i32, V = i32> {
    buckets: Vec<Option<DefaultKey>>,
    entries: SlotMap<DefaultKey, Entry<K, V>>, // chain nodes, linked through `next`
}

impl<K: BucketKey, V> ChainedHashMap<K, V> {
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_CAPACITY)
    }

    /// Create a map with `capacity` buckets. Fails on zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self::with_buckets(capacity))
    }

    fn with_buckets(capacity: usize) -> Self {
        Self {
            buckets: vec![None; capacity],
            entries: SlotMap::with_key(),
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of buckets. Only ever grows.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Length of the chain in bucket `index`, or `None` past the last bucket.
    pub fn bucket_len(&self, index: usize) -> Option<usize> {
        let mut cur = *self.buckets.get(index)?;
        let mut n = 0;
        while let Some(k) = cur {
            n += 1;
            cur = self.entries[k].next;
        }
        Some(n)
    }

    fn bucket_of(&self, key: K) -> usize {
        key.bucket(self.capacity())
    }

    fn find(&self, key: K) -> Option<DefaultKey> {
        let mut cur = self.buckets[self.bucket_of(key)];
        while let Some(k) = cur {
            let entry = &self.entries[k];
            if entry.key == key {
                return Some(k);
            }
            cur = entry.next;
        }
        None
    }

    pub fn get(&self, key: K) -> Option<&V> {
        self.find(key).map(|k| &self.entries[k].value)
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        let k = self.find(key)?;
        self.entries.get_mut(k).map(|e| &mut e.value)
    }

    pub fn contains_key(&self, key: K) -> bool {
        self.find(key).is_some()
    }

    /// Insert `key -> value`.
    ///
    /// An existing key has its value overwritten in place and the old value
    /// is returned; size and capacity are untouched. A new key is appended to
    /// the tail of its chain, after which the table doubles if the load
    /// factor has reached one half.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_of(key);
        let mut tail = None;
        let mut cur = self.buckets[index];
        while let Some(k) = cur {
            let entry = &mut self.entries[k];
            if entry.key == key {
                trace!("overwrite key {:?} in bucket {}", key, index);
                return Some(mem::replace(&mut entry.value, value));
            }
            tail = Some(k);
            cur = entry.next;
        }

        let new = self.entries.insert(Entry {
            key,
            value,
            next: None,
        });
        match tail {
            Some(t) => self.entries[t].next = Some(new),
            None => self.buckets[index] = Some(new),
        }
        trace!("insert key {:?} into bucket {}", key, index);

        if self.len() * MAX_LOAD_DEN >= self.capacity() * MAX_LOAD_NUM {
            self.resize();
        }
        None
    }

    /// Remove `key`, returning whether an entry was unlinked.
    pub fn remove(&mut self, key: K) -> bool {
        self.take(key).is_some()
    }

    /// Remove `key` and hand back its value.
    pub fn take(&mut self, key: K) -> Option<V> {
        let index = self.bucket_of(key);
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.buckets[index];
        while let Some(k) = cur {
            let entry = &self.entries[k];
            let next = entry.next;
            if entry.key == key {
                match prev {
                    Some(p) => self.entries[p].next = next,
                    None => self.buckets[index] = next,
                }
                trace!("remove key {:?} from bucket {}", key, index);
                return self.entries.remove(k).map(|e| e.value);
            }
            prev = Some(k);
            cur = next;
        }
        None
    }

    /// Drop every entry. Capacity is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.buckets.fill(None);
    }

    // Entries are relinked, not reallocated, so arena keys survive a resize.
    // Old buckets are walked in index order and each chain head to tail, and
    // every entry is appended to its new chain's tail, so entries that share
    // a new bucket keep their original relative order.
    fn resize(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * 2;
        let old = mem::replace(&mut self.buckets, vec![None; new_capacity]);
        let mut tails: Vec<Option<DefaultKey>> = vec![None; new_capacity];

        for head in old {
            let mut cur = head;
            while let Some(k) = cur {
                let entry = &mut self.entries[k];
                cur = entry.next.take();
                let index = entry.key.bucket(new_capacity);
                match tails[index] {
                    Some(t) => self.entries[t].next = Some(k),
                    None => self.buckets[index] = Some(k),
                }
                tails[index] = Some(k);
            }
        }

        debug!(
            "resized chained map from {} to {} buckets ({} entries)",
            old_capacity,
            new_capacity,
            self.len()
        );
    }

    /// Iterate in bucket order, chain order within each bucket.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            map: self,
            bucket: 0,
            cur: None,
            remaining: self.len(),
        }
    }
}

impl<K: BucketKey, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: BucketKey, V: fmt::Debug> fmt::Debug for ChainedHashMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: BucketKey, V> Extend<(K, V)> for ChainedHashMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: BucketKey, V> FromIterator<(K, V)> for ChainedHashMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, K: BucketKey, V> IntoIterator for &'a ChainedHashMap<K, V> {
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(key, &value)` pairs of a [`ChainedHashMap`].
pub struct Iter<'a, K, V> {
    map: &'a ChainedHashMap<K, V>,
    bucket: usize,
    cur: Option<DefaultKey>,
    remaining: usize,
}

impl<'a, K: Copy, V> Iterator for Iter<'a, K, V> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(k) = self.cur {
                let entry = &self.map.entries[k];
                self.cur = entry.next;
                self.remaining -= 1;
                return Some((entry.key, &entry.value));
            }
            self.cur = *self.map.buckets.get(self.bucket)?;
            self.bucket += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Copy, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K: Copy, V> FusedIterator for Iter<'_, K, V> {}
