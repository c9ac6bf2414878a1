//! Result caching keyed by argument.
//!
//! [`Memoize`] calls its function once per distinct key and serves every
//! repeat from an in-memory table. The table is owned by the wrapper, lives
//! as long as it does, and is never evicted.
//!
//! # Cache Keys
//!
//! - [`memoize`]: the argument itself (`Hash + Eq`). Arguments are told apart
//!   by value *and* type, so `1` and `"1"` never share an entry.
//! - [`memoize_stringified`]: the argument's `Display` rendering. Distinct
//!   arguments that print the same share one entry.
//! - [`Memoize::with_key`]: any caller-supplied key function.
//!
//! # Hasher
//!
//! The table uses the std `RandomState` by default, `rustc-hash` with the
//! `fxhash` feature, or `ahash` with the `ahash` feature.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::hash::Hash;
use std::marker::PhantomData;

#[cfg(feature = "fxhash")]
type CacheHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type CacheHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type CacheHasher = std::collections::hash_map::RandomState;

/// A function wrapper that caches one result per key.
///
/// # Type Parameters
///
/// * `A` - The argument type (use a tuple for several arguments)
/// * `R` - The result type, cloned out of the cache
/// * `F` - The wrapped function
/// * `K` - The cache key type
/// * `G` - The function deriving a key from an argument
///
/// # Thread Safety
///
/// This type is NOT thread-safe; state lives in `RefCell`s.
pub struct Memoize<A, R, F, K = A, G = fn(&A) -> A> {
    function: RefCell<F>,
    key: G,
    cache: RefCell<HashMap<K, R, CacheHasher>>,
    _argument: PhantomData<fn(A)>,
}

impl<A, R, F> Memoize<A, R, F>
where
    A: Clone + Eq + Hash,
    R: Clone,
    F: FnMut(A) -> R,
{
    /// Wraps `function`, keying the cache on the argument itself.
    pub fn new(function: F) -> Self {
        Self::with_key(function, A::clone)
    }
}

impl<A, R, F> Memoize<A, R, F, String, fn(&A) -> String>
where
    A: Display,
    R: Clone,
    F: FnMut(A) -> R,
{
    /// Wraps `function`, keying the cache on the argument's `Display` output.
    pub fn stringified(function: F) -> Self {
        Self::with_key(function, <A as ToString>::to_string)
    }
}

impl<A, R, F, K, G> Memoize<A, R, F, K, G>
where
    R: Clone,
    F: FnMut(A) -> R,
    K: Eq + Hash,
    G: Fn(&A) -> K,
{
    /// Wraps `function`, keying the cache on `key(&argument)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::function::Memoize;
    ///
    /// // Case-insensitive cache.
    /// let greet = Memoize::with_key(
    ///     |name: String| format!("hello, {name}"),
    ///     |name: &String| name.to_lowercase(),
    /// );
    /// assert_eq!(greet.call("Ada".to_string()), "hello, Ada");
    /// assert_eq!(greet.call("ADA".to_string()), "hello, Ada");
    /// assert_eq!(greet.cached_len(), 1);
    /// ```
    pub fn with_key(function: F, key: G) -> Self {
        Self {
            function: RefCell::new(function),
            key,
            cache: RefCell::new(HashMap::with_hasher(CacheHasher::default())),
            _argument: PhantomData,
        }
    }

    /// Returns the cached result for `argument`'s key, calling the wrapped
    /// function and caching its result on a miss.
    ///
    /// Every result is cached, including `false`, zero and empty values.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped function calls this wrapper re-entrantly. A panic
    /// raised by the wrapped function propagates unchanged and leaves the
    /// cache as it was.
    pub fn call(&self, argument: A) -> R {
        let key = (self.key)(&argument);
        if let Some(result) = self.cache.borrow().get(&key) {
            tracing::trace!("memoize: cache hit");
            return result.clone();
        }

        tracing::trace!(cached = self.cached_len(), "memoize: cache miss");
        let result = (*self.function.borrow_mut())(argument);
        self.cache.borrow_mut().insert(key, result.clone());
        result
    }
}

impl<A, R, F, K, G> Memoize<A, R, F, K, G> {
    /// Returns the number of cached results.
    #[inline]
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<A, R, F, K: fmt::Debug, G> fmt::Debug for Memoize<A, R, F, K, G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.cache.borrow();
        formatter
            .debug_struct("Memoize")
            .field("keys", &cache.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Returns a function that caches `function`'s result per distinct argument.
///
/// # Examples
///
/// ```rust
/// use underbar::function::memoize;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let square = memoize(|value: u64| {
///     calls.set(calls.get() + 1);
///     value * value
/// });
///
/// assert_eq!(square(12), 144);
/// assert_eq!(square(12), 144);
/// assert_eq!(square(3), 9);
/// assert_eq!(calls.get(), 2);
/// ```
pub fn memoize<A, R, F>(function: F) -> impl Fn(A) -> R
where
    A: Clone + Eq + Hash,
    R: Clone,
    F: FnMut(A) -> R,
{
    let wrapper = Memoize::new(function);
    move |argument| wrapper.call(argument)
}

/// Returns a function that caches `function`'s result per distinct
/// `Display` rendering of its argument.
///
/// # Examples
///
/// ```rust
/// use underbar::function::memoize_stringified;
/// use std::cell::Cell;
///
/// // `f64` is not `Hash`, but it prints.
/// let calls = Cell::new(0);
/// let double = memoize_stringified(|value: f64| {
///     calls.set(calls.get() + 1);
///     value * 2.0
/// });
///
/// assert_eq!(double(1.5), 3.0);
/// assert_eq!(double(1.5), 3.0);
/// assert_eq!(calls.get(), 1);
/// ```
pub fn memoize_stringified<A, R, F>(function: F) -> impl Fn(A) -> R
where
    A: Display,
    R: Clone,
    F: FnMut(A) -> R,
{
    let wrapper = Memoize::stringified(function);
    move |argument| wrapper.call(argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum Loose {
        Number(i64),
        Text(String),
    }

    impl Display for Loose {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Number(number) => write!(formatter, "{number}"),
                Self::Text(text) => write!(formatter, "{text}"),
            }
        }
    }

    #[rstest]
    fn test_memoize_caches_falsy_results() {
        let calls = Cell::new(0);
        let wrapper = Memoize::new(|value: i32| {
            calls.set(calls.get() + 1);
            value > 10
        });
        assert!(!wrapper.call(1));
        assert!(!wrapper.call(1));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_structural_key_distinguishes_number_and_text() {
        let wrapper = Memoize::new(|value: Loose| value.to_string().len());
        wrapper.call(Loose::Number(1));
        wrapper.call(Loose::Text("1".to_string()));
        assert_eq!(wrapper.cached_len(), 2);
    }

    #[rstest]
    fn test_stringified_key_collapses_number_and_text() {
        let calls = Cell::new(0);
        let wrapper = Memoize::stringified(|value: Loose| {
            calls.set(calls.get() + 1);
            value
        });
        assert_eq!(wrapper.call(Loose::Number(1)), Loose::Number(1));
        assert_eq!(wrapper.call(Loose::Text("1".to_string())), Loose::Number(1));
        assert_eq!(calls.get(), 1);
        assert_eq!(wrapper.cached_len(), 1);
    }

    #[rstest]
    fn test_memoize_with_tuple_arguments() {
        let add = memoize(|(left, right): (i32, i32)| left + right);
        assert_eq!(add((1, 2)), 3);
        assert_eq!(add((2, 1)), 3);
    }

    #[rstest]
    fn test_memoize_debug_lists_keys() {
        let wrapper = Memoize::new(|value: u8| value);
        wrapper.call(5);
        assert_eq!(format!("{wrapper:?}"), "Memoize { keys: [5], .. }");
    }
}
