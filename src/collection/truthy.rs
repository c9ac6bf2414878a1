//! Truthiness of predicate results.
//!
//! Predicates passed to [`filter`](super::filter), [`every`](super::every)
//! and friends may return any [`Truthy`] value, not only `bool`.
//!
//! | Type | Falsy when |
//! |------|------------|
//! | `bool` | `false` |
//! | integers | zero |
//! | floats | zero or NaN |
//! | `str` / `String` | empty |
//! | `Option<T>` | `None`, or `Some` of a falsy value |
//! | `()` | always |

/// A value that can be tested for truthiness.
pub trait Truthy {
    /// Returns `true` if the value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(-3, true)]
    fn test_integer_truthiness(#[case] value: i32, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    fn test_float_nan_is_falsy() {
        assert!(!f64::NAN.is_truthy());
        assert!(!0.0_f64.is_truthy());
        assert!(0.5_f64.is_truthy());
    }

    #[rstest]
    fn test_string_truthiness() {
        assert!(!"".is_truthy());
        assert!("x".is_truthy());
        assert!(!String::new().is_truthy());
    }

    #[rstest]
    fn test_option_truthiness_looks_inside() {
        assert!(!None::<bool>.is_truthy());
        assert!(!Some(false).is_truthy());
        assert!(Some(true).is_truthy());
    }
}
