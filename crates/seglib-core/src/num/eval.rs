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

//! # Evaluative Functions
//!
//! Arithmetic means over sequences of numbers. Both functions return zero for
//! an empty input instead of dividing by zero; callers that must distinguish
//! "empty" from "mean of zero" should check the length themselves.

use crate::num::traits::Numerical;
use num_traits::{AsPrimitive, FromPrimitive};

/// Returns the arithmetic mean of `values` as an `f64`.
///
/// Each element is widened to `f64` before summation, so integer inputs do
/// not truncate. Returns `0.0` when `values` is empty.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::eval::average;
/// assert_eq!(average([2, 4, 6]), 4.0);
/// assert_eq!(average(vec![1_u8, 2]), 1.5);
/// assert_eq!(average(Vec::<i32>::new()), 0.0);
/// ```
pub fn average<I>(values: I) -> f64
where
    I: IntoIterator,
    I::Item: AsPrimitive<f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v.as_(), count + 1));

    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

/// Returns the arithmetic mean of `values` in the element type itself.
///
/// Summation and division happen in `T`, so integral element types use
/// integer division. Returns zero when `values` is empty or when the element
/// count is not representable in `T`.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::eval::average_type;
/// assert_eq!(average_type(&[2, 4, 6]), 4);
/// assert_eq!(average_type(&[1, 2]), 1); // integer division
/// assert_eq!(average_type(&[1.0, 2.0]), 1.5);
/// assert_eq!(average_type::<i32>(&[]), 0);
/// ```
pub fn average_type<T>(values: &[T]) -> T
where
    T: Numerical + FromPrimitive,
{
    if values.is_empty() {
        return T::zero();
    }
    let Some(count) = T::from_usize(values.len()) else {
        return T::zero();
    };

    let mut sum = T::zero();
    for &v in values {
        sum += v;
    }
    sum / count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_empty_is_zero() {
        assert_eq!(average(Vec::<f64>::new()), 0.0);
        assert_eq!(average(std::iter::empty::<u32>()), 0.0);
    }

    #[test]
    fn test_average_simple() {
        assert_eq!(average([2, 4, 6]), 4.0);
        assert_eq!(average([1.5_f32, 2.5]), 2.0);
        assert_eq!(average([-1_i64, 1]), 0.0);
    }

    #[test]
    fn test_average_does_not_overflow_small_types() {
        assert_eq!(average([200_u8, 200, 200]), 200.0);
    }

    #[test]
    fn test_average_accepts_borrowed_iterators() {
        let values = [3_i32, 4, 5];
        assert_eq!(average(values.iter().copied()), 4.0);
    }

    #[test]
    fn test_average_type_integer_division() {
        assert_eq!(average_type(&[2, 4, 6]), 4);
        assert_eq!(average_type(&[1, 2, 2]), 1);
        assert_eq!(average_type(&[-3, -4]), -3);
    }

    #[test]
    fn test_average_type_float() {
        assert_eq!(average_type(&[1.0_f64, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn test_average_type_empty_is_zero() {
        assert_eq!(average_type::<u64>(&[]), 0);
        assert_eq!(average_type::<f32>(&[]), 0.0);
    }

    #[test]
    fn test_average_type_unrepresentable_count_is_zero() {
        let values = vec![1_i8; 200];
        assert_eq!(average_type(&values), 0);
    }
}
