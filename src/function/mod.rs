//! Function decorators.
//!
//! Each decorator wraps an arbitrary function and returns a new callable with
//! modified invocation semantics. The state behind a wrapper (called flag,
//! cache, cooling deadline) is owned by that wrapper alone: decorating the
//! same function twice yields two independent wrappers.
//!
//! - [`once`] / [`Once`]: call at most once, then replay the first result
//! - [`memoize`] / [`Memoize`]: cache one result per argument
//! - [`throttle`] / [`Throttle`]: forward at most one call per time window
//! - [`delay`]: run a call later on a tokio timer
//!
//! Wrapped functions take a single argument; use a tuple for several.
//!
//! # Examples
//!
//! ```rust
//! use underbar::function::{memoize, once};
//!
//! let fibonacci = memoize(|n: u64| (1..=n).fold((0_u64, 1_u64), |(a, b), _| (b, a + b)).0);
//! assert_eq!(fibonacci(10), 55);
//!
//! let greeting = once(|(name, punctuation): (&str, char)| format!("hi {name}{punctuation}"));
//! assert_eq!(greeting(("ada", '!')), "hi ada!");
//! assert_eq!(greeting(("bob", '?')), "hi ada!");
//! ```

mod delay;
mod memoize;
mod once;
pub mod runtime;
mod throttle;

pub use delay::delay;
pub use memoize::{Memoize, memoize, memoize_stringified};
pub use once::{Once, once};
pub use throttle::{Throttle, throttle};

/// Returns its argument unchanged.
///
/// Useful as the default iterator for operations that take a callback.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::map;
/// use underbar::function::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(map(&vec![1, 2], |value| identity(*value)), vec![1, 2]);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}
