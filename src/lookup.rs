//! Immutable, const-constructable key/value lookup table.
//!
//! [`LookupTable`] is a finished artifact, not a dynamic dictionary: exactly
//! `N` entries fixed at construction, no insertion or removal afterwards.
//! [`find`](LookupTable::find) scans in declaration order and returns the
//! first match, so duplicate keys are permitted and the earliest entry wins.
//!
//! # Examples
//!
//! ```
//! use groundwork::{LookupEntry, LookupTable};
//!
//! const UNITS: LookupTable<u8, &str, 3> = LookupTable::new([
//!     LookupEntry::new(1, "one"),
//!     LookupEntry::new(2, "two"),
//!     LookupEntry::new(3, "three"),
//! ]);
//!
//! assert_eq!(UNITS.find(&2), Some(&"two"));
//! assert_eq!(UNITS.find(&9), None);
//! ```

/// An immutable (key, value) pair inside a [`LookupTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupEntry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> LookupEntry<K, V> {
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

/// An ordered, fixed-length sequence of exactly `N` entries, built once and
/// never mutated.
///
/// Key equality is the key type's native [`PartialEq`]; the table imposes no
/// ordering requirement beyond "declaration order is scan order".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTable<K, V, const N: usize> {
    entries: [LookupEntry<K, V>; N],
}

impl<K, V, const N: usize> LookupTable<K, V, N> {
    /// Builds the table from its complete entry list. Usable in `const`
    /// contexts, so tables of literals cost nothing at runtime.
    #[inline]
    pub const fn new(entries: [LookupEntry<K, V>; N]) -> Self {
        Self { entries }
    }

    /// Number of entries, always exactly `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` iff `N == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Linear scan in declaration order; returns the value of the first entry
    /// whose key compares equal, or `None` (always `None` when `N == 0`).
    pub fn find(&self, key: &K) -> Option<&V>
    where
        K: PartialEq,
    {
        self.entries
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| &entry.value)
    }

    /// `true` iff some entry's key compares equal to `key`.
    #[inline]
    pub fn contains(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        self.find(key).is_some()
    }

    /// Entries in declaration order, read-only.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, LookupEntry<K, V>> {
        self.entries.iter()
    }

    /// The backing entries as a slice, in declaration order.
    #[inline]
    pub fn entries(&self) -> &[LookupEntry<K, V>] {
        &self.entries
    }
}

impl<'a, K, V, const N: usize> IntoIterator for &'a LookupTable<K, V, N> {
    type Item = &'a LookupEntry<K, V>;
    type IntoIter = core::slice::Iter<'a, LookupEntry<K, V>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
