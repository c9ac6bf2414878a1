//! In-place merging of associative containers: [`extend`] and [`defaults`].
//!
//! These are the only collection operations besides
//! [`sort_by`](super::sort_by) that mutate their input. The mutation is
//! confined to `target`; sources are only read, through [`each`].

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::kernel::{Collection, each};

/// An associative container whose entries can be inserted by key.
pub trait Mapping: Collection {
    /// The owned key type.
    type EntryKey;

    /// Converts a traversal key into a reference to the owned key.
    fn entry_key<'a>(key: Self::Key<'a>) -> &'a Self::EntryKey
    where
        Self: 'a;

    /// Returns `true` if `key` is present.
    fn has_key(&self, key: &Self::EntryKey) -> bool;

    /// Inserts or overwrites the entry for `key`.
    fn assign(&mut self, key: Self::EntryKey, value: Self::Value);
}

impl<K: Eq + Hash, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    type EntryKey = K;

    #[inline]
    fn entry_key<'a>(key: &'a K) -> &'a K
    where
        Self: 'a,
    {
        key
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type EntryKey = K;

    #[inline]
    fn entry_key<'a>(key: &'a K) -> &'a K
    where
        Self: 'a,
    {
        key
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

/// Copies every entry of each source into `target`, in argument order.
///
/// Later sources overwrite earlier ones and any value already in `target`.
/// Returns `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::extend;
/// use std::collections::BTreeMap;
///
/// let mut target = BTreeMap::from([("a", 1), ("b", 2)]);
/// let first = BTreeMap::from([("b", 20), ("c", 30)]);
/// let second = BTreeMap::from([("c", 300)]);
///
/// extend(&mut target, [&first, &second]);
/// assert_eq!(target, BTreeMap::from([("a", 1), ("b", 20), ("c", 300)]));
/// ```
pub fn extend<'s, M, I>(target: &mut M, sources: I) -> &mut M
where
    M: Mapping + 's,
    M::EntryKey: Clone,
    M::Value: Clone,
    I: IntoIterator<Item = &'s M>,
{
    for source in sources {
        each(source, |value, key, _| {
            target.assign(M::entry_key(key).clone(), value.clone());
        });
    }
    target
}

/// Fills in entries missing from `target`, scanning sources in argument order.
///
/// A key already present in `target` is never overwritten, and for a missing
/// key the first source that defines it wins. Returns `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::defaults;
/// use std::collections::HashMap;
///
/// let mut options = HashMap::from([("color", "red")]);
/// let fallback = HashMap::from([("color", "blue"), ("size", "large")]);
///
/// defaults(&mut options, [&fallback]);
/// assert_eq!(options["color"], "red");
/// assert_eq!(options["size"], "large");
/// ```
pub fn defaults<'s, M, I>(target: &mut M, sources: I) -> &mut M
where
    M: Mapping + 's,
    M::EntryKey: Clone,
    M::Value: Clone,
    I: IntoIterator<Item = &'s M>,
{
    for source in sources {
        each(source, |value, key, _| {
            let key = M::entry_key(key);
            if !target.has_key(key) {
                target.assign(key.clone(), value.clone());
            }
        });
    }
    target
}
