//! Calling a method or function on every element.
//!
//! A method is selected by name at run time through the [`Methods`] trait;
//! a function is called with the element as its receiver.

use super::kernel::{Collection, each};
use super::transform::map;
use crate::error::InvokeError;

/// Run-time method dispatch by name.
///
/// `A` is the type of the extra arguments passed to every call.
pub trait Methods<A: ?Sized> {
    /// The result type shared by all methods of this table.
    type Output;

    /// Calls the method `name` on `self`.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::UnknownMethod`] if no method is called `name`.
    fn call_method(&self, name: &str, arguments: &A) -> Result<Self::Output, InvokeError>;
}

impl Methods<()> for String {
    type Output = Self;

    fn call_method(&self, name: &str, (): &()) -> Result<Self, InvokeError> {
        match name {
            "to_uppercase" => Ok(self.to_uppercase()),
            "to_lowercase" => Ok(self.to_lowercase()),
            "trim" => Ok(self.trim().to_string()),
            "trim_start" => Ok(self.trim_start().to_string()),
            "trim_end" => Ok(self.trim_end().to_string()),
            _ => Err(unknown_method("String", name)),
        }
    }
}

impl Methods<usize> for String {
    type Output = Self;

    fn call_method(&self, name: &str, count: &usize) -> Result<Self, InvokeError> {
        match name {
            "repeat" => Ok(self.repeat(*count)),
            _ => Err(unknown_method("String", name)),
        }
    }
}

/// Methods on vectors return a modified copy; the element itself is never
/// changed.
impl<T: Ord + Clone> Methods<()> for Vec<T> {
    type Output = Self;

    fn call_method(&self, name: &str, (): &()) -> Result<Self, InvokeError> {
        let mut copy = self.clone();
        match name {
            "sort" => copy.sort(),
            "reverse" => copy.reverse(),
            "dedup" => copy.dedup(),
            _ => return Err(unknown_method("Vec", name)),
        }
        Ok(copy)
    }
}

impl<T: Clone> Methods<usize> for Vec<T> {
    type Output = Self;

    fn call_method(&self, name: &str, amount: &usize) -> Result<Self, InvokeError> {
        let mut copy = self.clone();
        match name {
            "rotate_left" if !copy.is_empty() => copy.rotate_left(amount % self.len()),
            "rotate_right" if !copy.is_empty() => copy.rotate_right(amount % self.len()),
            "rotate_left" | "rotate_right" => {}
            _ => return Err(unknown_method("Vec", name)),
        }
        Ok(copy)
    }
}

fn unknown_method(type_name: &'static str, name: &str) -> InvokeError {
    InvokeError::UnknownMethod {
        type_name,
        name: name.to_string(),
    }
}

/// Something [`invoke`] can call on each element: a [`Method`] looked up
/// by name or a plain [`Function`].
pub trait Invoker<V, A: ?Sized> {
    /// The result of one call.
    type Output;

    /// Calls the invoker on `value` with the shared `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::UnknownMethod`] if the invoker names a method
    /// `value` does not have.
    fn invoke_on(&mut self, value: &V, arguments: &A) -> Result<Self::Output, InvokeError>;
}

/// A method looked up by name through [`Methods`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Method<'n>(pub &'n str);

impl<V, A> Invoker<V, A> for Method<'_>
where
    V: Methods<A>,
    A: ?Sized,
{
    type Output = V::Output;

    fn invoke_on(&mut self, value: &V, arguments: &A) -> Result<V::Output, InvokeError> {
        value.call_method(self.0, arguments)
    }
}

/// A function receiving the element and the shared arguments.
///
/// Annotate the closure's parameter types (`|value: &i32, factor: &i32| ..`)
/// so that it accepts references of any lifetime.
#[derive(Debug, Clone, Copy)]
pub struct Function<F>(pub F);

impl<V, A, F, R> Invoker<V, A> for Function<F>
where
    A: ?Sized,
    F: FnMut(&V, &A) -> R,
{
    type Output = R;

    fn invoke_on(&mut self, value: &V, arguments: &A) -> Result<R, InvokeError> {
        Ok((self.0)(value, arguments))
    }
}

/// Calls `invoker` on every element with `arguments`, collecting results.
///
/// # Errors
///
/// Returns [`InvokeError::UnknownMethod`] if `invoker` names a method the
/// element type does not have. Dispatch stops at the first failure.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Function, Method, invoke};
///
/// let lists = vec![vec![5, 1, 7], vec![3, 2, 1]];
/// let sorted = invoke(&lists, Method("sort"), &()).unwrap();
/// assert_eq!(sorted, vec![vec![1, 5, 7], vec![1, 2, 3]]);
///
/// let scaled = invoke(&vec![1, 2, 3], Function(|value: &i32, factor: &i32| value * factor), &10);
/// assert_eq!(scaled, Ok(vec![10, 20, 30]));
/// ```
pub fn invoke<C, A, I>(
    collection: &C,
    mut invoker: I,
    arguments: &A,
) -> Result<Vec<I::Output>, InvokeError>
where
    C: Collection + ?Sized,
    I: Invoker<C::Value, A>,
    A: ?Sized,
{
    let mut results = Vec::new();
    let mut failure = None;
    each(collection, |value, _, _| {
        if failure.is_some() {
            return;
        }
        match invoker.invoke_on(value, arguments) {
            Ok(result) => results.push(result),
            Err(error) => failure = Some(error),
        }
    });
    match failure {
        Some(error) => Err(error),
        None => Ok(results),
    }
}

/// Calls the method `name` on every element.
///
/// # Errors
///
/// Returns [`InvokeError::UnknownMethod`] on the first element that has no
/// method called `name`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::invoke_method;
///
/// let words = vec!["dog".to_string(), "cat".to_string()];
/// assert_eq!(
///     invoke_method(&words, "to_uppercase", &()).unwrap(),
///     vec!["DOG".to_string(), "CAT".to_string()]
/// );
/// assert!(invoke_method(&words, "bark", &()).is_err());
/// ```
pub fn invoke_method<C, A>(
    collection: &C,
    name: &str,
    arguments: &A,
) -> Result<Vec<<C::Value as Methods<A>>::Output>, InvokeError>
where
    C: Collection + ?Sized,
    C::Value: Methods<A>,
    A: ?Sized,
{
    invoke(collection, Method(name), arguments)
}

/// Calls `function(element, arguments)` on every element.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::invoke_function;
///
/// let scaled = invoke_function(&[1, 2, 3], |value, factor| value * factor, &10);
/// assert_eq!(scaled, vec![10, 20, 30]);
/// ```
pub fn invoke_function<C, A, F, R>(collection: &C, mut function: F, arguments: &A) -> Vec<R>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Value, &A) -> R,
    A: ?Sized,
{
    map(collection, |value| function(value, arguments))
}
