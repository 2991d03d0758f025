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

//! Trivial arithmetic operators, usable as function values where a closure
//! would otherwise be spelled out (e.g. `operate(&values, &1, |a, b| add(*a, *b))`).

use crate::num::traits::Numerical;

/// Returns `a + b`.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::ops::add;
/// assert_eq!(add(2, 3), 5);
/// assert_eq!(add(0.5, 0.25), 0.75);
/// ```
#[inline]
pub fn add<T>(a: T, b: T) -> T
where
    T: Numerical,
{
    a + b
}

/// Returns `value * value`.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::ops::square;
/// assert_eq!(square(-4), 16);
/// assert_eq!(square(1.5_f32), 2.25);
/// ```
#[inline]
pub fn square<T>(value: T) -> T
where
    T: Numerical,
{
    value * value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_commutative_for_samples() {
        for (a, b) in [(1, 2), (-7, 3), (0, 0), (100, -100)] {
            assert_eq!(add(a, b), add(b, a));
        }
    }

    #[test]
    fn test_square() {
        assert_eq!(square(0_u8), 0);
        assert_eq!(square(15_u8), 225);
        assert_eq!(square(-3_i64), 9);
    }
}
