//! At-most-once invocation.
//!
//! [`Once`] wraps a function so that only the first call reaches it; every
//! later call, whatever its argument, returns a clone of that first result.
//!
//! # Examples
//!
//! ```rust
//! use underbar::function::once;
//! use std::cell::Cell;
//!
//! let launches = Cell::new(0);
//! let launch = once(|target: &str| {
//!     launches.set(launches.get() + 1);
//!     format!("launched at {target}")
//! });
//!
//! assert_eq!(launch("moon"), "launched at moon");
//! assert_eq!(launch("mars"), "launched at moon");
//! assert_eq!(launches.get(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

use crate::error::PoisonedError;

enum OnceState<R, F> {
    Pending(F),
    Called(R),
    Poisoned,
}

/// A function wrapper that calls its function at most once.
///
/// # Type Parameters
///
/// * `A` - The argument type (use a tuple for several arguments)
/// * `R` - The result type, cloned out on every call
/// * `F` - The wrapped function
///
/// # Thread Safety
///
/// This type is NOT thread-safe; state lives in a `RefCell`.
pub struct Once<A, R, F> {
    state: RefCell<OnceState<R, F>>,
    _argument: PhantomData<fn(A)>,
}

impl<A, R, F> Once<A, R, F>
where
    R: Clone,
    F: FnOnce(A) -> R,
{
    /// Wraps `function`. Nothing is called until the first [`call`](Self::call).
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Pending(function)),
            _argument: PhantomData,
        }
    }

    /// Calls the wrapped function on the first call; returns the cached
    /// result on every call after that.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped function panicked during an earlier call, or if
    /// it calls this wrapper re-entrantly. A panic raised by the wrapped
    /// function itself propagates unchanged.
    pub fn call(&self, argument: A) -> R {
        match self.try_call(argument) {
            Ok(result) => result,
            Err(error) => panic!("{error}"),
        }
    }

    /// Like [`call`](Self::call), but reports a poisoned wrapper as an error.
    ///
    /// # Errors
    ///
    /// Returns [`PoisonedError`] if the wrapped function panicked during an
    /// earlier call (or is currently running further up the stack).
    pub fn try_call(&self, argument: A) -> Result<R, PoisonedError> {
        let mut state = self.state.borrow_mut();
        match &*state {
            OnceState::Called(result) => {
                tracing::trace!("once: returning cached result");
                return Ok(result.clone());
            }
            OnceState::Poisoned => return Err(PoisonedError { decorator: "once" }),
            OnceState::Pending(_) => {}
        }

        // Stay poisoned until the function returns, so a panic leaves a
        // poisoned wrapper behind.
        let OnceState::Pending(function) = std::mem::replace(&mut *state, OnceState::Poisoned)
        else {
            unreachable!()
        };
        drop(state);

        tracing::trace!("once: invoking wrapped function");
        let result = function(argument);
        *self.state.borrow_mut() = OnceState::Called(result.clone());
        Ok(result)
    }
}

impl<A, R, F> Once<A, R, F> {
    /// Returns whether the wrapped function has completed a call.
    #[inline]
    pub fn is_called(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Called(_))
    }

    /// Returns whether the wrapped function panicked.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Poisoned)
    }
}

impl<A, R: fmt::Debug, F> fmt::Debug for Once<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            OnceState::Called(result) => formatter.debug_tuple("Once").field(result).finish(),
            OnceState::Pending(_) => formatter.debug_tuple("Once").field(&"<pending>").finish(),
            OnceState::Poisoned => formatter.debug_tuple("Once").field(&"<poisoned>").finish(),
        }
    }
}

/// Returns a function that calls `function` only the first time it is called.
///
/// Each call to `once` produces an independent wrapper with its own state.
///
/// # Examples
///
/// ```rust
/// use underbar::function::once;
///
/// let initialize = once(|seed: u64| seed * 2);
/// assert_eq!(initialize(21), 42);
/// assert_eq!(initialize(0), 42);
/// ```
pub fn once<A, R, F>(function: F) -> impl Fn(A) -> R
where
    R: Clone,
    F: FnOnce(A) -> R,
{
    let wrapper = Once::new(function);
    move |argument| wrapper.call(argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[rstest]
    fn test_once_is_lazy() {
        let called = Cell::new(false);
        let wrapper = Once::new(|(): ()| called.set(true));
        assert!(!called.get());
        assert!(!wrapper.is_called());
    }

    #[rstest]
    fn test_once_caches_first_result() {
        let wrapper = Once::new(|value: i32| value + 1);
        assert_eq!(wrapper.call(1), 2);
        assert_eq!(wrapper.call(100), 2);
        assert!(wrapper.is_called());
    }

    #[rstest]
    fn test_separate_wrappers_have_separate_state() {
        let calls = Cell::new(0);
        let count = |(): ()| {
            calls.set(calls.get() + 1);
            calls.get()
        };
        let first = once(count);
        let second = once(count);
        assert_eq!(first(()), 1);
        assert_eq!(second(()), 2);
        assert_eq!(first(()), 1);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_once_poisoned_after_panic() {
        let wrapper: Once<(), i32, _> = Once::new(|(): ()| panic!("boom"));
        let outcome = catch_unwind(AssertUnwindSafe(|| wrapper.call(())));
        assert!(outcome.is_err());
        assert!(wrapper.is_poisoned());
        assert_eq!(
            wrapper.try_call(()),
            Err(PoisonedError { decorator: "once" })
        );
    }

    #[rstest]
    fn test_once_debug_shows_state() {
        let wrapper = Once::new(|value: u8| value);
        assert_eq!(format!("{wrapper:?}"), "Once(\"<pending>\")");
        wrapper.call(7);
        assert_eq!(format!("{wrapper:?}"), "Once(7)");
    }
}
