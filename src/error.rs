//! Error types.
//!
//! The library does not wrap failures raised by user callbacks: a panicking
//! iterator or decorated function unwinds straight through to the caller.
//! The types here cover the few situations the library itself detects.

use thiserror::Error;

/// Returned when a decorator is called after its wrapped function panicked
/// part-way through an earlier call.
///
/// # Examples
///
/// ```rust
/// use underbar::error::PoisonedError;
///
/// let error = PoisonedError { decorator: "once" };
/// assert_eq!(
///     format!("{error}"),
///     "once: wrapped function panicked during an earlier call"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{decorator}: wrapped function panicked during an earlier call")]
pub struct PoisonedError {
    /// Name of the decorator that observed the panic.
    pub decorator: &'static str,
}

/// Errors raised by [`invoke`](crate::collection::invoke) when dispatching a
/// method by name.
///
/// # Examples
///
/// ```rust
/// use underbar::error::InvokeError;
///
/// let error = InvokeError::UnknownMethod {
///     type_name: "String",
///     name: "shout".to_string(),
/// };
/// assert_eq!(format!("{error}"), "String has no method named `shout`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokeError {
    /// The element type does not expose a method with this name.
    #[error("{type_name} has no method named `{name}`")]
    UnknownMethod {
        /// Element type the lookup was performed on.
        type_name: &'static str,
        /// The requested method name.
        name: String,
    },
}
