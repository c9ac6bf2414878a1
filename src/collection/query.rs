//! Membership and quantifier queries.

use super::kernel::{Collection, each, index_of};
use super::truthy::Truthy;

/// Returns `true` if any entry of `collection` equals `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::contains;
///
/// assert!(contains(&vec![1, 2, 3], &3));
/// assert!(!contains(&vec![1, 2, 3], &4));
/// ```
pub fn contains<C>(collection: &C, target: &C::Value) -> bool
where
    C: Collection + ?Sized,
    C::Value: PartialEq,
{
    index_of(collection, target).is_some()
}

/// Returns `true` if `predicate` is truthy for every element.
///
/// Vacuously `true` for an empty collection. Once an element fails, the
/// predicate is not called for the remaining elements.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every;
///
/// assert!(every(&vec![2, 4, 6], |value| value % 2 == 0));
/// assert!(!every(&vec![2, 3, 6], |value| value % 2 == 0));
/// assert!(every(&Vec::<i32>::new(), |_| false));
/// ```
pub fn every<C, F, P>(collection: &C, mut predicate: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&C::Value) -> P,
    P: Truthy,
{
    let mut passed = true;
    each(collection, |value, _, _| {
        if passed && !predicate(value).is_truthy() {
            passed = false;
        }
    });
    passed
}

/// [`every`] using the truthiness of the elements themselves.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every_truthy;
///
/// assert!(every_truthy(&vec![true, true]));
/// assert!(!every_truthy(&vec![1, 0, 1]));
/// ```
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Value: Truthy,
{
    every(collection, |value| value.is_truthy())
}

/// Returns `true` if `predicate` is truthy for at least one element.
///
/// Defined as the negation of [`every`] over the negated predicate.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::some;
///
/// assert!(some(&vec![1, 3, 4], |value| value % 2 == 0));
/// assert!(!some(&Vec::<i32>::new(), |_| true));
/// ```
pub fn some<C, F, P>(collection: &C, mut predicate: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&C::Value) -> P,
    P: Truthy,
{
    !every(collection, |value| !predicate(value).is_truthy())
}

/// [`some`] using the truthiness of the elements themselves.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::some_truthy;
///
/// assert!(some_truthy(&vec!["", "x"]));
/// assert!(!some_truthy(&vec![false, false]));
/// ```
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Value: Truthy,
{
    some(collection, |value| value.is_truthy())
}
