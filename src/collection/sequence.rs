//! Operations on ordered sequences: slicing, zipping, flattening and set-like
//! comparisons.

use super::kernel::each;
use super::query::{contains, every, some};
use super::transform::{filter, reduce, reject};

/// Returns the first element, or `None` for an empty sequence.
#[inline]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns the first `count` elements; the whole sequence if it is shorter.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), vec![1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 5), vec![1, 2, 3]);
/// ```
pub fn first_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[..count.min(sequence.len())].to_vec()
}

/// Returns the last element, or `None` for an empty sequence.
#[inline]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns the last `count` elements; the whole sequence if it is shorter.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), vec![2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 5), vec![1, 2, 3]);
/// ```
pub fn last_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[sequence.len().saturating_sub(count)..].to_vec()
}

// =============================================================================
// zip
// =============================================================================

/// Groups the elements at each position of `sequences` into a row.
///
/// Row `i` holds `sequences[0][i], sequences[1][i], ...`. There are as many
/// rows as the longest input has elements; positions past the end of a
/// shorter input are `None`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::zip;
///
/// let rows = zip(&[&[1, 2, 3][..], &[10, 20][..]]);
/// assert_eq!(
///     rows,
///     vec![
///         vec![Some(1), Some(10)],
///         vec![Some(2), Some(20)],
///         vec![Some(3), None],
///     ]
/// );
/// ```
pub fn zip<T: Clone>(sequences: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = reduce(
        sequences,
        |longest, sequence| longest.max(sequence.len()),
        0_usize,
    );
    let mut rows: Vec<Vec<Option<T>>> = (0..longest)
        .map(|_| Vec::with_capacity(sequences.len()))
        .collect();
    each(sequences, |sequence, _, _| {
        for (position, row) in rows.iter_mut().enumerate() {
            row.push(sequence.get(position).cloned());
        }
    });
    rows
}

/// Pairs up two sequences of possibly different element types.
///
/// The result is as long as the longer input; missing positions are `None`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::zip2;
///
/// assert_eq!(
///     zip2(&['a', 'b', 'c'], &[1, 2]),
///     vec![(Some('a'), Some(1)), (Some('b'), Some(2)), (Some('c'), None)]
/// );
/// ```
pub fn zip2<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(Option<A>, Option<B>)> {
    let mut pairs = Vec::with_capacity(left.len().max(right.len()));
    each(left, |value, index, _| {
        pairs.push((Some(value.clone()), right.get(index).cloned()));
    });
    each(right, |value, index, _| {
        if index >= left.len() {
            pairs.push((None, Some(value.clone())));
        }
    });
    pairs
}

// =============================================================================
// flatten
// =============================================================================

/// A sequence element that is either a value or a further sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    /// A plain value.
    Leaf(T),
    /// A nested sequence.
    List(Vec<Nested<T>>),
}

/// Builds a `Vec<Nested<_>>` from bracketed literal syntax.
///
/// Each leaf must be a single token tree; wrap anything longer, such as
/// `-1` or `a + b`, in parentheses.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Nested;
/// use underbar::nested;
///
/// let value = nested![1, [2, (-3)]];
/// assert_eq!(
///     value,
///     vec![
///         Nested::Leaf(1),
///         Nested::List(vec![Nested::Leaf(2), Nested::Leaf(-3)]),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! nested {
    (@item [$($inner:tt)*]) => {
        $crate::collection::Nested::List($crate::nested![$($inner)*])
    };
    (@item $leaf:tt) => {
        $crate::collection::Nested::Leaf($leaf)
    };
    ($($item:tt),* $(,)?) => {
        ::std::vec![$($crate::nested!(@item $item)),*]
    };
}

/// Collects every leaf of `nested`, depth first, left to right.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::flatten;
/// use underbar::nested;
///
/// assert_eq!(flatten(&nested![1, [2, [3, [4]], 5]]), vec![1, 2, 3, 4, 5]);
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    let mut results = Vec::new();
    flatten_into(nested, &mut results);
    results
}

fn flatten_into<T: Clone>(nested: &[Nested<T>], results: &mut Vec<T>) {
    each(nested, |item, _, _| match item {
        Nested::Leaf(value) => results.push(value.clone()),
        Nested::List(inner) => flatten_into(inner, results),
    });
}

// =============================================================================
// Set-like comparisons
// =============================================================================

/// Returns the elements of `left` that also occur in `right`, in `left`'s order.
///
/// Duplicates in `left` are kept.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::intersection;
///
/// assert_eq!(intersection(&[1, 2, 3], &[2, 3, 4]), vec![2, 3]);
/// assert_eq!(intersection(&[2, 2, 5], &[2]), vec![2, 2]);
/// ```
pub fn intersection<T: Clone + PartialEq>(left: &[T], right: &[T]) -> Vec<T> {
    filter(left, |value| contains(right, value))
}

/// Returns the elements of the first sequence that occur in every other one.
///
/// An empty slice of sequences yields an empty result.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::intersection_all;
///
/// let shared = intersection_all(&[&[1, 2, 3, 4][..], &[2, 3, 4][..], &[3, 4, 5][..]]);
/// assert_eq!(shared, vec![3, 4]);
/// ```
pub fn intersection_all<T: Clone + PartialEq>(sequences: &[&[T]]) -> Vec<T> {
    let Some((head, rest)) = sequences.split_first() else {
        return Vec::new();
    };
    filter(*head, |value| every(rest, |other| contains(*other, value)))
}

/// Returns the elements of `sequence` that occur in none of `others`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4], &[&[2, 4][..]]), vec![1, 3]);
/// assert_eq!(difference(&[1, 2, 3, 4], &[&[2][..], &[3][..]]), vec![1, 4]);
/// ```
pub fn difference<T: Clone + PartialEq>(sequence: &[T], others: &[&[T]]) -> Vec<T> {
    reject(sequence, |value| some(others, |other| contains(*other, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nested;
    use rstest::rstest;

    #[rstest]
    fn test_first_and_last_on_empty() {
        let empty: [i32; 0] = [];
        assert_eq!(first(&empty), None);
        assert_eq!(last(&empty), None);
        assert!(first_n(&empty, 3).is_empty());
        assert!(last_n(&empty, 3).is_empty());
    }

    #[rstest]
    fn test_zip_output_length_follows_longest_input() {
        let short: &[i32] = &[1];
        let long: &[i32] = &[1, 2, 3];
        let rows = zip(&[short, long]);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 2));
        assert_eq!(rows[2], vec![None, Some(3)]);
    }

    #[rstest]
    fn test_zip_of_nothing_is_empty() {
        let rows: Vec<Vec<Option<u8>>> = zip(&[]);
        assert!(rows.is_empty());
    }

    #[rstest]
    fn test_zip2_when_right_is_longer() {
        assert_eq!(
            zip2(&[1], &["a", "b"]),
            vec![(Some(1), Some("a")), (None, Some("b"))]
        );
    }

    #[rstest]
    fn test_flatten_empty_lists_contribute_nothing() {
        let value: Vec<Nested<i32>> = nested![[], [[]], 1];
        assert_eq!(flatten(&value), vec![1]);
    }

    #[rstest]
    fn test_flatten_deep_nesting() {
        let mut value = vec![Nested::Leaf(0)];
        for depth in 1..200 {
            value = vec![Nested::List(value), Nested::Leaf(depth)];
        }
        let flat = flatten(&value);
        assert_eq!(flat, (0..200).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_difference_with_no_others_is_identity() {
        assert_eq!(difference(&[3, 1, 2], &[]), vec![3, 1, 2]);
    }

    #[rstest]
    fn test_intersection_all_with_single_sequence() {
        assert_eq!(intersection_all(&[&[1, 1, 2][..]]), vec![1, 1, 2]);
    }
}
