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

//! # Seglib Core
//!
//! Numeric building blocks for the seglib toolkit. Every function in this
//! crate is a small, stateless operation over a generic number type, bounded
//! by the trait vocabulary in `num::traits` so that unsupported types are
//! rejected at compile time rather than at runtime.
//!
//! ## Modules
//!
//! - `num`: Trait bounds (`Numerical`, `IntegralNumerical`), predicates
//!   (parity, sign, primality), comparisons (ranges, approximate equality,
//!   divisibility), trivial operators, averages, and generators for random
//!   floats, primes and composites.
//!
//! ## Policy
//!
//! Nothing here allocates an error type. Degenerate inputs are answered with
//! fixed sentinels (`0` for a non-divisible quotient or an empty average),
//! while arithmetic faults such as a zero divisor keep the panicking
//! behaviour of the primitive integer operators.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
