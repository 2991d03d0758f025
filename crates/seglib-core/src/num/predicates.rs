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

//! # Single-Value Predicates
//!
//! Boolean checks over one number: self-equality, parity, sign,
//! primality and compositeness.
//!
//! ```rust
//! use seglib_core::num::predicates::{is_composite, is_even, is_itself, is_prime};
//!
//! assert!(is_even(10_u32));
//! assert!(is_prime(97_i64));
//! assert!(is_composite(91_i64)); // 7 * 13
//! assert!(!is_itself(f64::NAN));
//! ```

use crate::num::traits::{IntegralNumerical, Numerical};

/// Returns `true` if `value == value`.
///
/// For floating-point types this is a NaN detector: NaN is the only value
/// that is not equal to itself.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::predicates::is_itself;
/// assert!(is_itself(3));
/// assert!(is_itself(0.25_f32));
/// assert!(!is_itself(f32::NAN));
/// ```
#[inline]
#[allow(clippy::eq_op)]
pub fn is_itself<T>(value: T) -> bool
where
    T: Numerical,
{
    value == value
}

/// Returns `true` if `value` is divisible by two.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::predicates::is_even;
/// assert!(is_even(0));
/// assert!(is_even(-4));
/// assert!(!is_even(7_u8));
/// ```
#[inline]
pub fn is_even<T>(value: T) -> bool
where
    T: IntegralNumerical,
{
    value % (T::one() + T::one()) == T::zero()
}

/// Returns `true` if `value` is not divisible by two.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::predicates::is_odd;
/// assert!(is_odd(-3));
/// assert!(!is_odd(8_u64));
/// ```
#[inline]
pub fn is_odd<T>(value: T) -> bool
where
    T: IntegralNumerical,
{
    !is_even(value)
}

/// Returns `true` if `value` is strictly greater than zero.
#[inline]
pub fn is_positive<T>(value: T) -> bool
where
    T: Numerical,
{
    value > T::zero()
}

/// Returns `true` if `value` is strictly less than zero.
#[inline]
pub fn is_negative<T>(value: T) -> bool
where
    T: Numerical,
{
    value < T::zero()
}

/// Returns `true` if `value` is a prime number.
///
/// Values `<= 1` are never prime and `2` and `3` always are. Multiples of two
/// and three are rejected up front, after which trial division proceeds over
/// candidates of the form `6k ± 1` up to `√value`.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::predicates::is_prime;
/// assert!(!is_prime(1));
/// assert!(is_prime(2));
/// assert!(is_prime(7919));
/// assert!(!is_prime(7917));
/// assert!(!is_prime(-7));
/// ```
pub fn is_prime<T>(value: T) -> bool
where
    T: IntegralNumerical,
{
    let two = T::one() + T::one();
    let three = two + T::one();

    if value <= T::one() {
        return false;
    }
    if value <= three {
        return true;
    }
    if is_even(value) || value % three == T::zero() {
        return false;
    }

    let six = three + three;
    let mut candidate = three + two;
    // `candidate <= value / candidate` is `candidate² <= value` without overflow.
    while candidate <= value / candidate {
        if value % candidate == T::zero() || value % (candidate + two) == T::zero() {
            return false;
        }
        candidate = candidate + six;
    }
    true
}

/// Returns `true` if `value` is greater than one and not prime.
///
/// Zero and one are neither prime nor composite.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::predicates::is_composite;
/// assert!(!is_composite(0));
/// assert!(!is_composite(1));
/// assert!(!is_composite(13));
/// assert!(is_composite(4));
/// ```
#[inline]
pub fn is_composite<T>(value: T) -> bool
where
    T: IntegralNumerical,
{
    value > T::one() && !is_prime(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_is_prime(n: u64) -> bool {
        n >= 2 && (2..n).all(|d| n % d != 0)
    }

    #[test]
    fn test_is_itself_detects_nan() {
        assert!(is_itself(1.0_f64));
        assert!(is_itself(f64::INFINITY));
        assert!(!is_itself(f64::NAN));
        assert!(is_itself(i32::MIN));
    }

    #[test]
    fn test_parity_for_signed_and_unsigned() {
        for v in -10_i32..=10 {
            assert_eq!(is_even(v), v.rem_euclid(2) == 0, "value {v}");
            assert_eq!(is_odd(v), !is_even(v), "value {v}");
        }
        assert!(is_even(u8::MAX - 1));
        assert!(is_odd(u8::MAX));
    }

    #[test]
    fn test_sign_predicates_are_strict() {
        assert!(is_positive(1));
        assert!(!is_positive(0));
        assert!(is_negative(-0.5_f32));
        assert!(!is_negative(0.0_f64));
        assert!(!is_negative(-0.0_f64));
        assert!(!is_positive(0_u32));
    }

    #[test]
    fn test_is_prime_matches_naive_trial_division() {
        for n in 0_u64..2000 {
            assert_eq!(is_prime(n), naive_is_prime(n), "value {n}");
        }
    }

    #[test]
    fn test_is_prime_small_and_negative() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(25));
        assert!(!is_prime(-2_i32));
        assert!(!is_prime(i64::MIN));
    }

    #[test]
    fn test_is_prime_near_type_limits() {
        assert!(is_prime(251_u8));
        assert!(!is_prime(u8::MAX));
        assert!(is_prime(127_i8));
        assert!(is_prime(4_294_967_291_u32));
        assert!(!is_prime(u32::MAX));
    }

    #[test]
    fn test_is_composite_complements_is_prime_above_one() {
        for n in 0_i32..500 {
            if n > 1 {
                assert_eq!(is_composite(n), !is_prime(n), "value {n}");
            } else {
                assert!(!is_composite(n), "value {n}");
            }
        }
    }
}
