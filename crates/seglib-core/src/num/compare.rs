// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Comparative Functions
//!
//! Checks relating two or more numbers: expected sums, range membership,
//! approximate floating-point equality and divisibility, plus quotient
//! helpers built on the divisibility check.
//!
//! Range helpers take their bounds as given. When `lower > upper` no value
//! lies in the range and the functions simply return `false`.

use crate::num::traits::{IntegralNumerical, Numerical};
use num_traits::Float;

/// Returns `true` if `a + b == expected`.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::compare::is_this_right;
/// assert!(is_this_right(2, 2, 4));
/// assert!(!is_this_right(2, 2, 5));
/// ```
#[inline]
pub fn is_this_right<T>(a: T, b: T, expected: T) -> bool
where
    T: Numerical,
{
    a + b == expected
}

/// Returns `true` if `lower <= value <= upper`.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::compare::in_range;
/// assert!(in_range(5, 1, 5));
/// assert!(in_range(1, 1, 5));
/// assert!(!in_range(6, 1, 5));
/// assert!(!in_range(3, 5, 1)); // inverted bounds admit nothing
/// ```
#[inline]
pub fn in_range<T>(value: T, lower: T, upper: T) -> bool
where
    T: Numerical,
{
    value >= lower && value <= upper
}

/// Returns `true` if `lower < value < upper`.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::compare::in_range_exclusive;
/// assert!(in_range_exclusive(3, 1, 5));
/// assert!(!in_range_exclusive(5, 1, 5));
/// assert!(!in_range_exclusive(1, 1, 5));
/// ```
#[inline]
pub fn in_range_exclusive<T>(value: T, lower: T, upper: T) -> bool
where
    T: Numerical,
{
    value > lower && value < upper
}

/// Returns `true` if two floating-point values are approximately equal.
///
/// The tolerance is the larger of an absolute bound `ε·100` and a relative
/// bound `ε·10·max(|a|, |b|)`, where `ε` is the machine epsilon of `T`.
/// The check is `b - tol <= a <= b + tol`, so it is symmetric in `a` and `b`.
/// NaN is never approximately equal to anything.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::compare::is_approximately_equal;
/// assert!(is_approximately_equal(0.1_f64 + 0.2, 0.3));
/// assert!(is_approximately_equal(1.0_f32, 1.0 + 1e-6));
/// assert!(!is_approximately_equal(1.0_f64, 1.1));
/// ```
pub fn is_approximately_equal<T>(a: T, b: T) -> bool
where
    T: Float + Numerical,
{
    let hundred = T::from(100.0).unwrap_or_else(T::one);
    let ten = T::from(10.0).unwrap_or_else(T::one);

    let absolute = T::epsilon() * hundred;
    let relative = T::epsilon() * ten * a.abs().max(b.abs());
    let tolerance = absolute.max(relative);

    in_range(a, b - tolerance, b + tolerance)
}

/// Returns `true` if `denominator` divides `numerator` without remainder.
///
/// # Panics
///
/// Panics if `denominator` is zero, like the `%` operator on primitive integers.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::compare::is_divisible_by;
/// assert!(is_divisible_by(12, 4));
/// assert!(!is_divisible_by(12, 5));
/// assert!(is_divisible_by(0, 7));
/// ```
#[inline]
pub fn is_divisible_by<T>(numerator: T, denominator: T) -> bool
where
    T: IntegralNumerical,
{
    numerator % denominator == T::zero()
}

/// Returns `value / factor` if `factor` divides `value`, otherwise zero.
///
/// Zero doubles as the "not divisible" sentinel and as the genuine quotient
/// of `0 / factor`; use [`checked_quotient`] to tell them apart.
///
/// # Panics
///
/// Panics if `factor` is zero.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::compare::get_quotient;
/// assert_eq!(get_quotient(12, 4), 3);
/// assert_eq!(get_quotient(12, 5), 0);
/// ```
#[inline]
pub fn get_quotient<T>(value: T, factor: T) -> T
where
    T: IntegralNumerical,
{
    if !is_divisible_by(value, factor) {
        return T::zero();
    }
    value / factor
}

/// Returns `Some(value / factor)` if `factor` is non-zero and divides `value`
/// exactly, otherwise `None`.
///
/// Unlike [`get_quotient`] this never panics: a zero divisor and an
/// overflowing division (`MIN / -1`) both yield `None`.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::compare::checked_quotient;
/// assert_eq!(checked_quotient(12, 4), Some(3));
/// assert_eq!(checked_quotient(0, 4), Some(0));
/// assert_eq!(checked_quotient(12, 5), None);
/// assert_eq!(checked_quotient(12, 0), None);
/// assert_eq!(checked_quotient(i8::MIN, -1), None);
/// ```
pub fn checked_quotient<T>(value: T, factor: T) -> Option<T>
where
    T: IntegralNumerical,
{
    let quotient = value.checked_div(&factor)?;
    if quotient * factor == value {
        Some(quotient)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_this_right_with_floats_and_ints() {
        assert!(is_this_right(0.5_f64, 0.25, 0.75));
        assert!(is_this_right(-3, 3, 0));
        assert!(!is_this_right(1_u8, 1, 3));
    }

    #[test]
    fn test_in_range_bounds() {
        assert!(in_range(0.0_f64, 0.0, 1.0));
        assert!(in_range(1.0_f64, 0.0, 1.0));
        assert!(!in_range(1.000_001_f64, 0.0, 1.0));
        assert!(in_range(7, 7, 7));
        assert!(!in_range_exclusive(7, 7, 7));
    }

    #[test]
    fn test_inverted_bounds_admit_nothing() {
        for v in -5..=15 {
            assert!(!in_range(v, 10, 0), "value {v}");
            assert!(!in_range_exclusive(v, 10, 0), "value {v}");
        }
    }

    #[test]
    fn test_approximately_equal_single_precision() {
        assert!(is_approximately_equal(1.0_f32, 1.0_f32 + 1e-12));
        assert!(is_approximately_equal(1.0_f32, 1.0_f32 + 1e-6));
        assert!(!is_approximately_equal(1.0_f32, 1.1));
    }

    #[test]
    fn test_approximately_equal_double_precision() {
        assert!(is_approximately_equal(1.0_f64, 1.0 + 1e-15));
        assert!(is_approximately_equal(0.1_f64 + 0.2, 0.3));
        assert!(!is_approximately_equal(1.0_f64, 1.1));
        assert!(!is_approximately_equal(1.0_f64, 1.0 + 1e-12));
    }

    #[test]
    fn test_approximately_equal_is_symmetric() {
        let pairs = [(1.0_f64, 1.0 + 1e-14), (1e6, 1e6 + 1e-8), (-2.0, -2.0), (0.0, 1e-20)];
        for (a, b) in pairs {
            assert_eq!(is_approximately_equal(a, b), is_approximately_equal(b, a));
        }
    }

    #[test]
    fn test_approximately_equal_scales_with_magnitude() {
        // ε·10·1e9 ≈ 2.2e-6 dominates the absolute bound.
        assert!(is_approximately_equal(1e9_f64, 1e9 + 1e-6));
        assert!(!is_approximately_equal(1e9_f64, 1e9 + 1e-3));
    }

    #[test]
    fn test_approximately_equal_rejects_nan() {
        assert!(!is_approximately_equal(f64::NAN, f64::NAN));
        assert!(!is_approximately_equal(f64::NAN, 0.0));
    }

    #[test]
    fn test_divisibility() {
        assert!(is_divisible_by(-12, 3));
        assert!(is_divisible_by(12_u16, 12));
        assert!(!is_divisible_by(13, 2));
    }

    #[test]
    #[should_panic]
    fn test_divisibility_by_zero_panics() {
        let zero = std::hint::black_box(0);
        let _ = is_divisible_by(5, zero);
    }

    #[test]
    fn test_get_quotient_sentinel() {
        assert_eq!(get_quotient(100, 10), 10);
        assert_eq!(get_quotient(-9, 3), -3);
        assert_eq!(get_quotient(10, 3), 0);
        assert_eq!(get_quotient(0, 3), 0);
    }

    #[test]
    fn test_checked_quotient() {
        assert_eq!(checked_quotient(100_u32, 10), Some(10));
        assert_eq!(checked_quotient(10_u32, 3), None);
        assert_eq!(checked_quotient(10_u32, 0), None);
        assert_eq!(checked_quotient(i32::MIN, -1), None);
        assert_eq!(checked_quotient(i32::MIN, 1), Some(i32::MIN));
    }
}
