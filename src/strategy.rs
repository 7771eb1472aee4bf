//! The two container strategies under comparison, behind one interface.
//!
//! [`MapStrategy`] is the minimal surface both scenarios need: insert, point
//! lookup, inclusive range count, sorted snapshot. Scenario logic is written
//! once against the trait; the interesting differences live entirely in the
//! two implementations.
//!
//! - [`Ordered`] wraps `BTreeMap`: range counting walks the sorted structure
//!   from a lower bound, and a snapshot is plain iteration.
//! - [`Hashed`] wraps `HashMap`: range counting degrades to a full scan with
//!   a bounds filter, and a snapshot needs an explicit sort.
//!
//! Both resolve duplicate keys identically (last write wins), which keeps
//! the comparison fair when a workload repeats a key.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Minimal associative-container interface shared by both strategies.
pub trait MapStrategy<K, V>: Default {
    /// Short name for logs and bench labels.
    const NAME: &'static str;

    /// Insert `key -> value`. An existing entry for `key` is overwritten.
    fn insert(&mut self, key: K, value: V);

    /// Point lookup: whether `key` is present.
    fn contains(&self, key: &K) -> bool;

    /// Count entries whose key lies in the closed interval `[start, end]`.
    ///
    /// Empty when `start > end`.
    fn range_count(&self, start: &K, end: &K) -> usize;

    /// All entries as `(key, value)` pairs, ascending by key.
    fn sorted_pairs(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone;

    /// Number of distinct keys stored.
    fn len(&self) -> usize;

    /// Whether the container holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Balanced-tree strategy: keys kept in sorted order at all times.
#[derive(Debug)]
pub struct Ordered<K, V> {
    inner: BTreeMap<K, V>,
}

impl<K, V> Default for Ordered<K, V> {
    fn default() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }
}

impl<K: Ord, V> MapStrategy<K, V> for Ordered<K, V> {
    const NAME: &'static str = "ordered";

    fn insert(&mut self, key: K, value: V) {
        self.inner.insert(key, value);
    }

    fn contains(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    fn range_count(&self, start: &K, end: &K) -> usize {
        if start > end {
            return 0;
        }
        // Lower bound on start, walk forward while below the upper bound.
        self.inner.range(start..=end).count()
    }

    fn sorted_pairs(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        // Iteration order is already ascending; copying out is the whole job.
        self.inner
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Hash-table strategy: no key ordering maintained.
#[derive(Debug)]
pub struct Hashed<K, V> {
    inner: HashMap<K, V>,
}

impl<K, V> Default for Hashed<K, V> {
    fn default() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }
}

impl<K: Ord + Hash, V> MapStrategy<K, V> for Hashed<K, V> {
    const NAME: &'static str = "hashed";

    fn insert(&mut self, key: K, value: V) {
        self.inner.insert(key, value);
    }

    fn contains(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    fn range_count(&self, start: &K, end: &K) -> usize {
        // No order to exploit; every entry gets the bounds check.
        self.inner
            .keys()
            .filter(|k| *k >= start && *k <= end)
            .count()
    }

    fn sorted_pairs(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        let mut pairs: Vec<(K, V)> = self
            .inner
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
