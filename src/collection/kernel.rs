//! The iteration kernel.
//!
//! [`Collection`] abstracts over anything that can present its contents as
//! ordered key/value pairs. It is implemented once for indexed containers
//! (key = position) and once for associative containers (key = `&K`), and
//! [`each`] is the only place where that distinction is made. Every other
//! operation in [`crate::collection`] is written against [`each`].
//!
//! # Traversal Order
//!
//! - Indexed containers: strictly ascending index order, `0..len`.
//! - `BTreeMap`: ascending key order.
//! - `HashMap`: unspecified.
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::each;
//! use std::collections::BTreeMap;
//!
//! let mut seen = Vec::new();
//! each(&vec!["a", "b"], |value, index, _| seen.push((index, *value)));
//! assert_eq!(seen, vec![(0, "a"), (1, "b")]);
//!
//! let ages = BTreeMap::from([("alice", 31), ("bob", 27)]);
//! let mut keys = Vec::new();
//! each(&ages, |_, key, _| keys.push(*key));
//! assert_eq!(keys, vec!["alice", "bob"]);
//! ```

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

/// A container that can be traversed as a sequence of key/value pairs.
///
/// # Required Methods
///
/// - `each`: visit every entry exactly once, passing the value, its key and
///   the container itself.
///
/// Implementations must not mutate the container while traversing.
pub trait Collection {
    /// How an entry is addressed: `usize` for sequences, `&K` for mappings.
    type Key<'a>: Copy
    where
        Self: 'a;

    /// The element type.
    type Value;

    /// Calls `iterator(value, key, self)` once per entry.
    fn each<'a, F>(&'a self, iterator: F)
    where
        F: FnMut(&'a Self::Value, Self::Key<'a>, &'a Self);
}

// =============================================================================
// Indexed containers
// =============================================================================

macro_rules! impl_collection_for_indexed {
    ($([$($generics:tt)*] $container:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Collection for $container {
                type Key<'a>
                    = usize
                where
                    Self: 'a;
                type Value = T;

                fn each<'a, F>(&'a self, mut iterator: F)
                where
                    F: FnMut(&'a Self::Value, Self::Key<'a>, &'a Self),
                {
                    for (index, value) in self.iter().enumerate() {
                        iterator(value, index, self);
                    }
                }
            }
        )*
    };
}

impl_collection_for_indexed!(
    [T] [T],
    [T] Vec<T>,
    [T, const N: usize] [T; N],
    [T] VecDeque<T>,
);

// =============================================================================
// Associative containers
// =============================================================================

impl<K, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Key<'a>
        = &'a K
    where
        Self: 'a;
    type Value = V;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a Self::Value, Self::Key<'a>, &'a Self),
    {
        for (key, value) in self {
            iterator(value, key, self);
        }
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Key<'a>
        = &'a K
    where
        Self: 'a;
    type Value = V;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a Self::Value, Self::Key<'a>, &'a Self),
    {
        for (key, value) in self {
            iterator(value, key, self);
        }
    }
}

// =============================================================================
// Kernel entry points
// =============================================================================

/// Calls `iterator(value, key, collection)` for every entry of `collection`.
///
/// This is the traversal primitive the rest of the library is built from.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::each;
///
/// let mut total = 0;
/// each(&[1, 2, 3], |value, _, _| total += value);
/// assert_eq!(total, 6);
/// ```
#[inline]
pub fn each<'a, C, F>(collection: &'a C, iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Value, C::Key<'a>, &'a C),
{
    collection.each(iterator);
}

/// Returns the key of the first entry equal to `target`, or `None`.
///
/// For sequences the key is the lowest matching index. Entries after the
/// first match are still visited but no longer compared.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::index_of;
///
/// assert_eq!(index_of(&vec![10, 20, 10], &10), Some(0));
/// assert_eq!(index_of(&vec![10, 20, 10], &30), None);
/// ```
pub fn index_of<'a, C>(collection: &'a C, target: &C::Value) -> Option<C::Key<'a>>
where
    C: Collection + ?Sized,
    C::Value: PartialEq,
{
    let mut found = None;
    each(collection, |value, key, _| {
        if found.is_none() && value == target {
            found = Some(key);
        }
    });
    found
}
