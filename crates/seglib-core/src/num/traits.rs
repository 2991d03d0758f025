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

//! # Numeric Trait Bounds
//!
//! Marker traits describing the operator sets required by the numeric
//! helpers. Both traits are blanket-implemented, so any type providing the
//! underlying `num_traits` capabilities qualifies automatically and any type
//! that does not is rejected at the call site.
//!
//! ```rust
//! use seglib_core::num::traits::{IntegralNumerical, Numerical};
//!
//! fn needs_numerical<T: Numerical>(_: T) {}
//! fn needs_integral<T: IntegralNumerical>(_: T) {}
//!
//! needs_numerical(1.5_f64);
//! needs_numerical(7_u8);
//! needs_integral(-3_i64);
//! ```

use num_traits::{Num, NumAssign, PrimInt};

/// Types supporting the four arithmetic operators, their compound-assignment
/// forms, and ordering comparisons.
///
/// Implemented for every `Copy + PartialOrd + Num + NumAssign` type, which
/// covers all primitive integers and floats.
pub trait Numerical: Copy + PartialOrd + Num + NumAssign {}

impl<T> Numerical for T where T: Copy + PartialOrd + Num + NumAssign {}

/// Numerical types that are also primitive integers, i.e. have exact
/// remainder semantics and a total order.
pub trait IntegralNumerical: Numerical + PrimInt {}

impl<T> IntegralNumerical for T where T: Numerical + PrimInt {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_numerical<T: Numerical>() {}
    fn assert_integral<T: IntegralNumerical>() {}

    #[test]
    fn test_primitive_types_are_numerical() {
        assert_numerical::<i8>();
        assert_numerical::<u64>();
        assert_numerical::<f32>();
        assert_numerical::<f64>();
    }

    #[test]
    fn test_integers_are_integral() {
        assert_integral::<i32>();
        assert_integral::<u128>();
        assert_integral::<usize>();
    }
}
