//! Leading-edge rate limiting.
//!
//! A [`Throttle`] forwards a call to its function and then cools down for
//! `wait`. Calls that arrive while cooling are dropped: they are not queued
//! and no trailing call is made when the window closes. The first call after
//! the window closes goes through immediately and starts a new window.
//!
//! ```text
//! calls     : x  x x   x        x  x
//! forwarded : x        x        x
//! windows   : [--wait--][--wait--][--wait--]
//! ```
//!
//! The cooling deadline is checked synchronously at call time against
//! `tokio::time::Instant`, so a paused tokio test clock controls it. A window
//! too long to be represented as an `Instant` (such as `Duration::MAX`) never
//! closes.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug, Clone, Copy)]
enum Cooling {
    Idle,
    Until(Instant),
    Forever,
}

/// A function wrapper that forwards at most one call per `wait` window.
///
/// # Thread Safety
///
/// This type is NOT thread-safe; state lives in `Cell`/`RefCell`.
pub struct Throttle<A, R, F> {
    function: RefCell<F>,
    wait: Duration,
    cooling: Cell<Cooling>,
    _signature: PhantomData<fn(A) -> R>,
}

impl<A, R, F> Throttle<A, R, F>
where
    F: FnMut(A) -> R,
{
    /// Wraps `function` with a cooling window of `wait`.
    pub fn new(function: F, wait: Duration) -> Self {
        Self {
            function: RefCell::new(function),
            wait,
            cooling: Cell::new(Cooling::Idle),
            _signature: PhantomData,
        }
    }

    /// Forwards the call and returns `Some(result)`, or returns `None`
    /// without calling anything if the wrapper is cooling.
    ///
    /// # Panics
    ///
    /// A panic raised by the wrapped function propagates unchanged; the
    /// window it opened stays in effect.
    pub fn call(&self, argument: A) -> Option<R> {
        let now = Instant::now();
        if self.is_cooling_at(now) {
            tracing::trace!("throttle: dropping call while cooling");
            return None;
        }

        self.cooling.set(now.checked_add(self.wait).map_or(Cooling::Forever, Cooling::Until));
        tracing::trace!(wait_ms = self.wait.as_millis(), "throttle: invoking wrapped function");
        let mut function = self.function.borrow_mut();
        Some((*function)(argument))
    }
}

impl<A, R, F> Throttle<A, R, F> {
    /// Returns whether calls made now would be dropped.
    #[inline]
    pub fn is_cooling(&self) -> bool {
        self.is_cooling_at(Instant::now())
    }

    /// Returns the length of the cooling window.
    #[inline]
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    fn is_cooling_at(&self, now: Instant) -> bool {
        match self.cooling.get() {
            Cooling::Idle => false,
            Cooling::Until(deadline) => now < deadline,
            Cooling::Forever => true,
        }
    }
}

impl<A, R, F> fmt::Debug for Throttle<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Throttle")
            .field("wait", &self.wait)
            .field("cooling", &self.is_cooling())
            .finish_non_exhaustive()
    }
}

/// Returns a function that forwards at most one call per `wait` window.
///
/// The returned function yields `Some(result)` for forwarded calls and
/// `None` for dropped ones.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use underbar::function::throttle;
///
/// let mut saves = 0;
/// {
///     let save = throttle(|(): ()| saves += 1, Duration::from_secs(60));
///     assert_eq!(save(()), Some(()));
///     assert_eq!(save(()), None);
///     assert_eq!(save(()), None);
/// }
/// assert_eq!(saves, 1);
/// ```
pub fn throttle<A, R, F>(function: F, wait: Duration) -> impl Fn(A) -> Option<R>
where
    F: FnMut(A) -> R,
{
    let wrapper = Throttle::new(function, wait);
    move |argument| wrapper.call(argument)
}
