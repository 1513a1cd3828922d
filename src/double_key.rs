//! DoubleKeyTable: `(key1, key2) -> value` through a table of tables.

use crate::error::TableError;
use crate::linear_probe::LinearProbeTable;

/// Two-level hash table. The outer `LinearProbeTable` maps `key1` to an
/// inner `LinearProbeTable`, which maps `key2` to the value.
///
/// Inner tables are created lazily on the first insert under a `key1` and
/// discarded the instant they become empty after a removal, so no empty
/// inner table ever persists. Each level sizes and grows independently:
/// an inner resize never touches the outer array, and an outer resize
/// relocates `(key1, inner)` pairs as whole units without rehashing their
/// contents.
pub struct DoubleKeyTable<V> {
    outer: LinearProbeTable<LinearProbeTable<V>>,
    inner_sizes: Option<Vec<usize>>,
}

impl<V> DoubleKeyTable<V> {
    /// Build with the default capacity ladder at both levels.
    pub fn new() -> Self {
        Self::with_sizes(None, None)
    }

    /// Build with explicit capacity ladders: `sizes` for the outer table,
    /// `internal_sizes` for every inner table. Either may be `None` to use
    /// the default ladder. Intended for deterministic tests.
    pub fn with_sizes(sizes: Option<Vec<usize>>, internal_sizes: Option<Vec<usize>>) -> Self {
        let outer = match sizes {
            Some(ladder) => LinearProbeTable::with_sizes(ladder),
            None => LinearProbeTable::new(),
        };
        Self {
            outer,
            inner_sizes: internal_sizes,
        }
    }

    fn new_inner(&self) -> LinearProbeTable<V> {
        match &self.inner_sizes {
            Some(ladder) => LinearProbeTable::with_sizes(ladder.clone()),
            None => LinearProbeTable::new(),
        }
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.outer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outer.is_empty()
    }

    /// Capacity of the outer table.
    pub fn table_size(&self) -> usize {
        self.outer.table_size()
    }

    /// Capacity of the inner table under `key1`.
    pub fn inner_table_size(&self, key1: &str) -> Result<usize, TableError> {
        Ok(self.outer.get(key1)?.table_size())
    }

    pub fn get(&self, key1: &str, key2: &str) -> Result<&V, TableError> {
        self.outer.get(key1)?.get(key2)
    }

    pub fn contains(&self, key1: &str, key2: &str) -> bool {
        self.get(key1, key2).is_ok()
    }

    /// Insert or overwrite under the key pair. A fresh `key1` gets its
    /// inner table populated before the outer link is made, so a failed
    /// insert never leaves an empty inner table behind.
    pub fn insert(&mut self, key1: &str, key2: &str, value: V) -> Result<(), TableError> {
        if self.outer.contains_key(key1) {
            return self.outer.get_mut(key1)?.insert(key2, value);
        }
        let mut inner = self.new_inner();
        inner.insert(key2, value)?;
        self.outer.insert(key1, inner)
    }

    /// Remove the value under the key pair. Emptying an inner table
    /// removes its `key1` from the outer table as well.
    pub fn remove(&mut self, key1: &str, key2: &str) -> Result<V, TableError> {
        let inner = self.outer.get_mut(key1)?;
        let value = inner.remove(key2)?;
        if inner.is_empty() {
            self.outer.remove(key1)?;
        }
        Ok(value)
    }

    /// With `None`, every top-level key; with `Some(key1)`, every
    /// bottom-level key under `key1` (`KeyNotFound` if `key1` is absent).
    pub fn keys(&self, key1: Option<&str>) -> Result<Vec<&str>, TableError> {
        match key1 {
            None => Ok(self.outer.keys()),
            Some(k1) => Ok(self.outer.get(k1)?.keys()),
        }
    }

    /// With `None`, every value in the table; with `Some(key1)`, the
    /// values under `key1` (`KeyNotFound` if `key1` is absent).
    pub fn values(&self, key1: Option<&str>) -> Result<Vec<&V>, TableError> {
        match key1 {
            None => Ok(self.iter().map(|(_, _, value)| value).collect()),
            Some(k1) => Ok(self.outer.get(k1)?.values()),
        }
    }

    /// Iterate `(key1, key2, value)` triples, flattening outer then inner
    /// slots in array order.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (&'a str, &'a str, &'a V)> + 'a {
        self.outer.iter().flat_map(|(key1, inner)| {
            inner.iter().map(move |(key2, value)| (key1, key2, value))
        })
    }
}

impl<V> Default for DoubleKeyTable<V> {
    fn default() -> Self {
        Self::new()
    }
}
