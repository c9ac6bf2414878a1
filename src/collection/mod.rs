//! Collection traversal and the operations derived from it.
//!
//! This module provides the iteration kernel and the map/filter/reduce family
//! of operations built on top of it:
//!
//! - [`Collection`] / [`each`]: the kernel. Indexed containers (`[T]`,
//!   `Vec<T>`, `[T; N]`, `VecDeque<T>`) are traversed by position, associative
//!   containers (`HashMap`, `BTreeMap`) by key.
//! - Transformations: [`filter`], [`reject`], [`map`], [`pluck`], [`reduce`],
//!   [`reduce_first`], [`uniq`]
//! - Queries: [`index_of`], [`contains`], [`every`], [`some`]
//! - Merging: [`extend`], [`defaults`]
//! - Dispatch: [`invoke`]
//! - Ordering: [`sort_by`], [`shuffle`]
//! - Sequences: [`zip`], [`zip2`], [`flatten`], [`intersection`],
//!   [`difference`], [`first`], [`last`]
//!
//! # Mutation
//!
//! Every operation returns a newly allocated container and leaves its input
//! untouched, except [`extend`], [`defaults`] and [`sort_by`], which modify
//! and return their first argument.
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::{every, map, uniq};
//!
//! let tags = vec!["rust", "fp", "rust", "cli"];
//! let unique = uniq(&tags);
//! assert_eq!(unique, vec!["rust", "fp", "cli"]);
//!
//! let lengths = map(&unique, |tag| tag.len());
//! assert!(every(&lengths, |length| *length >= 2));
//! ```

mod invoke;
mod kernel;
mod mapping;
mod ordering;
mod query;
mod sequence;
mod transform;
mod truthy;

pub use invoke::{Function, Invoker, Method, Methods, invoke, invoke_function, invoke_method};
pub use kernel::{Collection, each, index_of};
pub use mapping::{Mapping, defaults, extend};
pub use ordering::{
    Ascending, ByKey, ByLength, Comparator, HasLength, SortCriterion, shuffle, shuffle_with,
    sort_by,
};
pub use query::{contains, every, every_truthy, some, some_truthy};
pub use sequence::{
    Nested, difference, first, first_n, flatten, intersection, intersection_all, last, last_n,
    zip, zip2,
};
pub use transform::{Lookup, filter, map, pluck, reduce, reduce_first, reject, uniq};
pub use truthy::Truthy;
