//! Element-wise transformations: filter, reject, map, pluck, reduce, uniq.
//!
//! All of these read their input through [`each`] and return a freshly
//! allocated `Vec`; the input collection is never modified.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::kernel::{Collection, each, index_of};
use super::truthy::Truthy;

/// Returns the elements for which `test` is truthy, in traversal order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::filter;
///
/// let odds = filter(&vec![1, 2, 3, 4, 5], |value| value % 2);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn filter<C, F, P>(collection: &C, mut test: F) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    F: FnMut(&C::Value) -> P,
    P: Truthy,
{
    let mut results = Vec::new();
    each(collection, |value, _, _| {
        if test(value).is_truthy() {
            results.push(value.clone());
        }
    });
    results
}

/// Returns the elements for which `test` is falsy. The complement of [`filter`].
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reject;
///
/// let evens = reject(&vec![1, 2, 3, 4, 5], |value| value % 2);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn reject<C, F, P>(collection: &C, mut test: F) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    F: FnMut(&C::Value) -> P,
    P: Truthy,
{
    filter(collection, |value| !test(value).is_truthy())
}

/// Returns the elements of `collection` with duplicates removed.
///
/// Only the first occurrence of each value is kept, and first occurrences
/// keep their relative order. Equality is `PartialEq`; no hashing is needed.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::uniq;
///
/// assert_eq!(uniq(&vec![1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// ```
pub fn uniq<C>(collection: &C) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone + PartialEq,
{
    let mut results: Vec<C::Value> = Vec::new();
    each(collection, |value, _, _| {
        if index_of(&results, value).is_none() {
            results.push(value.clone());
        }
    });
    results
}

/// Returns `function(element)` for every element, in traversal order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::map;
///
/// assert_eq!(map(&[1, 2, 3], |value| value * 10), vec![10, 20, 30]);
/// ```
pub fn map<C, F, U>(collection: &C, mut function: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Value) -> U,
{
    let mut results = Vec::new();
    each(collection, |value, _, _| results.push(function(value)));
    results
}

// =============================================================================
// pluck
// =============================================================================

/// Field access by key, used by [`pluck`].
pub trait Lookup<Q: ?Sized> {
    /// The type of the looked-up field.
    type Output;

    /// Returns the field stored under `key`, if any.
    fn lookup(&self, key: &Q) -> Option<&Self::Output>;
}

impl<K, V, Q, S> Lookup<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> Lookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Output = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<T> Lookup<usize> for Vec<T> {
    type Output = T;

    fn lookup(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

/// Extracts the field `key` from every element.
///
/// Elements that have no such field yield `None`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::pluck;
/// use std::collections::HashMap;
///
/// let people = vec![
///     HashMap::from([("name", "moe"), ("age", "30")]),
///     HashMap::from([("name", "curly")]),
/// ];
/// assert_eq!(pluck(&people, "age"), vec![Some("30"), None]);
/// ```
pub fn pluck<C, Q>(
    collection: &C,
    key: &Q,
) -> Vec<Option<<C::Value as Lookup<Q>>::Output>>
where
    C: Collection + ?Sized,
    C::Value: Lookup<Q>,
    <C::Value as Lookup<Q>>::Output: Clone,
    Q: ?Sized,
{
    map(collection, |element| element.lookup(key).cloned())
}

// =============================================================================
// reduce
// =============================================================================

/// Left fold of `collection` starting from `initial`.
///
/// `reducer(accumulator, element)` is called once per element and its
/// result becomes the next accumulator.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce;
///
/// let total = reduce(&vec![1, 2, 3, 4], |accumulator, value| accumulator + value, 10);
/// assert_eq!(total, 20);
/// ```
pub fn reduce<C, B, F>(collection: &C, mut reducer: F, initial: B) -> B
where
    C: Collection + ?Sized,
    F: FnMut(B, &C::Value) -> B,
{
    let mut accumulator = Some(initial);
    each(collection, |value, _, _| {
        if let Some(current) = accumulator.take() {
            accumulator = Some(reducer(current, value));
        }
    });
    let Some(result) = accumulator else {
        unreachable!("accumulator is restored after every step")
    };
    result
}

/// Left fold seeded with the first element; folding starts at the second.
///
/// Returns `None` for an empty collection. Reducing an empty collection
/// without a seed has no meaningful result, so callers should treat `None`
/// as a contract violation rather than a value.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce_first;
///
/// assert_eq!(reduce_first(&vec![1, 2, 3, 4], |left, right| left + right), Some(10));
/// assert_eq!(reduce_first(&Vec::<i32>::new(), |left, right| left + right), None);
/// ```
pub fn reduce_first<C, F>(collection: &C, mut reducer: F) -> Option<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    F: FnMut(C::Value, &C::Value) -> C::Value,
{
    let mut accumulator: Option<C::Value> = None;
    each(collection, |value, _, _| {
        accumulator = Some(match accumulator.take() {
            None => value.clone(),
            Some(current) => reducer(current, value),
        });
    });
    accumulator
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_filter_preserves_order() {
        let result = filter(&vec![5, 1, 4, 2, 3], |value| *value > 2);
        assert_eq!(result, vec![5, 4, 3]);
    }

    #[rstest]
    fn test_filter_over_mapping_collects_values() {
        let scores = BTreeMap::from([("a", 10), ("b", 55), ("c", 70)]);
        assert_eq!(filter(&scores, |score| *score >= 50), vec![55, 70]);
    }

    #[rstest]
    fn test_reject_is_complement_of_filter() {
        let values = vec![1, 2, 3, 4, 5, 6];
        assert_eq!(reject(&values, |value| value % 3 == 0), vec![1, 2, 4, 5]);
    }

    #[rstest]
    fn test_uniq_with_strings() {
        let words = vec!["b", "a", "b", "c", "a"];
        assert_eq!(uniq(&words), vec!["b", "a", "c"]);
    }

    #[rstest]
    fn test_map_over_mapping() {
        let prices = BTreeMap::from([("apple", 3), ("pear", 4)]);
        assert_eq!(map(&prices, |price| price * 2), vec![6, 8]);
    }

    #[rstest]
    fn test_pluck_from_vectors_by_index() {
        let rows = vec![vec![1, 2], vec![3], vec![4, 5]];
        assert_eq!(pluck(&rows, &1_usize), vec![Some(2), None, Some(5)]);
    }

    #[rstest]
    fn test_pluck_with_string_keys() {
        let records = vec![
            HashMap::from([("age".to_string(), 40)]),
            HashMap::from([("age".to_string(), 12)]),
        ];
        assert_eq!(pluck(&records, "age"), vec![Some(40), Some(12)]);
    }

    #[rstest]
    fn test_reduce_without_seed_sums() {
        assert_eq!(reduce_first(&[1, 2, 3, 4], |left, right| left + right), Some(10));
    }

    #[rstest]
    fn test_reduce_without_seed_single_element_is_returned_unchanged() {
        let mut calls = 0;
        let result = reduce_first(&[7], |left, right| {
            calls += 1;
            left + right
        });
        assert_eq!(result, Some(7));
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_reduce_with_seed_of_different_type() {
        let joined = reduce(
            &["a", "b", "c"],
            |mut accumulator: String, value| {
                accumulator.push_str(value);
                accumulator
            },
            String::new(),
        );
        assert_eq!(joined, "abc");
    }

    #[rstest]
    fn test_reduce_on_empty_returns_seed() {
        assert_eq!(reduce(&Vec::<i32>::new(), |left, right| left + right, 5), 5);
    }
}
