//! Reordering: in-place [`sort_by`] and the copying [`shuffle`].
//!
//! # Sort Criteria
//!
//! The sort order is chosen by an explicit [`SortCriterion`] value:
//!
//! - [`ByLength`]: ascending by [`HasLength::length`]
//! - [`Ascending`]: natural ascending order, numeric for numbers
//! - [`ByKey`]: ascending by a derived key
//! - [`Comparator`]: a caller-supplied comparison
//!
//! The criterion never depends on the contents of the sequence.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, VecDeque};

use rand::Rng;

use super::kernel::{Collection, each};

/// Values with a length, used by [`ByLength`].
pub trait HasLength {
    /// Returns the number of elements or bytes.
    fn length(&self) -> usize;
}

impl HasLength for str {
    fn length(&self) -> usize {
        self.len()
    }
}

impl HasLength for String {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> HasLength for HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> HasLength for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: HasLength + ?Sized> HasLength for &T {
    fn length(&self) -> usize {
        (**self).length()
    }
}

/// An ordering strategy for [`sort_by`].
pub trait SortCriterion<T: ?Sized> {
    /// Compares two elements.
    fn compare(&mut self, left: &T, right: &T) -> Ordering;
}

/// Orders elements by their length.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByLength;

impl<T: HasLength + ?Sized> SortCriterion<T> for ByLength {
    fn compare(&mut self, left: &T, right: &T) -> Ordering {
        left.length().cmp(&right.length())
    }
}

/// Orders elements ascending by `PartialOrd`.
///
/// Values that are not comparable with themselves (NaN) sort after every
/// other value, so floats are ordered totally.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascending;

impl<T: PartialOrd + ?Sized> SortCriterion<T> for Ascending {
    fn compare(&mut self, left: &T, right: &T) -> Ordering {
        left.partial_cmp(right).unwrap_or_else(|| {
            let left_comparable = left.partial_cmp(left).is_some();
            let right_comparable = right.partial_cmp(right).is_some();
            right_comparable.cmp(&left_comparable)
        })
    }
}

/// Orders elements ascending by the key `F` derives from each.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> SortCriterion<T> for ByKey<F>
where
    T: ?Sized,
    K: Ord,
    F: FnMut(&T) -> K,
{
    fn compare(&mut self, left: &T, right: &T) -> Ordering {
        (self.0)(left).cmp(&(self.0)(right))
    }
}

/// Orders elements with an explicit comparison function.
#[derive(Debug, Clone, Copy)]
pub struct Comparator<F>(pub F);

impl<T, F> SortCriterion<T> for Comparator<F>
where
    T: ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    fn compare(&mut self, left: &T, right: &T) -> Ordering {
        (self.0)(left, right)
    }
}

/// Sorts `sequence` in place according to `criterion` and returns it.
///
/// The sort is stable: elements that compare equal keep their order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Ascending, ByLength, sort_by};
///
/// let mut words = vec!["ccc", "a", "bb"];
/// sort_by(&mut words, ByLength);
/// assert_eq!(words, vec!["a", "bb", "ccc"]);
///
/// let mut numbers = vec![10, 9, 100];
/// assert_eq!(sort_by(&mut numbers, Ascending), &vec![9, 10, 100]);
/// ```
pub fn sort_by<T, S>(sequence: &mut Vec<T>, mut criterion: S) -> &mut Vec<T>
where
    S: SortCriterion<T>,
{
    sequence.sort_by(|left, right| criterion.compare(left, right));
    sequence
}

/// Returns a shuffled copy of `collection` using the thread-local generator.
///
/// Every permutation is equally likely. The input is not modified.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::shuffle;
///
/// let original = vec![1, 2, 3, 4];
/// let mut shuffled = shuffle(&original);
/// shuffled.sort();
/// assert_eq!(shuffled, original);
/// ```
pub fn shuffle<C>(collection: &C) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
{
    shuffle_with(collection, &mut rand::rng())
}

/// Returns a shuffled copy of `collection` drawing from `random`.
///
/// Inside-out Fisher-Yates: element `i` is appended and swapped with a
/// uniformly chosen position in `0..=i`.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use underbar::collection::shuffle_with;
///
/// let mut first = StdRng::seed_from_u64(7);
/// let mut second = StdRng::seed_from_u64(7);
/// assert_eq!(
///     shuffle_with(&[1, 2, 3, 4, 5], &mut first),
///     shuffle_with(&[1, 2, 3, 4, 5], &mut second)
/// );
/// ```
pub fn shuffle_with<C, R>(collection: &C, random: &mut R) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = Vec::new();
    each(collection, |value, _, _| {
        let position = shuffled.len();
        shuffled.push(value.clone());
        let target = random.random_range(0..=position);
        shuffled.swap(position, target);
    });
    shuffled
}
