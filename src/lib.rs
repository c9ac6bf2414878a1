//! # underbar
//!
//! Generic collection traversal and stateful function decorators.
//!
//! ## Overview
//!
//! - **Collections**: a single iteration kernel ([`collection::each`]) over
//!   indexed and associative containers, and the map/filter/reduce family of
//!   operations built on top of it.
//! - **Function decorators**: [`function::once`], [`function::memoize`],
//!   [`function::throttle`] and the timer-backed [`function::delay`].
//!
//! ## Feature Flags
//!
//! - `collection`: the iteration kernel and derived collection operations
//! - `function`: function decorators (pulls in `tokio` for timers)
//! - `fxhash` / `ahash`: faster hashers for the `memoize` cache
//! - `full`: enable all modules
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let evens = filter(&vec![1, 2, 3, 4], |value| value % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let sum = reduce(&evens, |accumulator, value| accumulator + value, 0);
//! assert_eq!(sum, 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every operation of the enabled modules.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;
}

pub mod error;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "function")]
pub mod function;
