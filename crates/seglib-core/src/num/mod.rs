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

//! # Numeric Utilities
//!
//! Generic predicates and operators over numbers. Each submodule groups
//! functions by what they do to their inputs.
//!
//! ## Submodules
//!
//! - `traits`: Blanket-implemented bounds (`Numerical`, `IntegralNumerical`)
//!   that stand in for the operator sets these functions require.
//! - `predicates`: Single-value checks (`is_itself`, `is_even`, `is_prime`, ...).
//! - `compare`: Multi-value checks (`in_range`, `is_approximately_equal`,
//!   `is_divisible_by`, ...) and the quotient helpers.
//! - `ops`: Trivial arithmetic (`add`, `square`).
//! - `eval`: Averages over sequences of numbers.
//! - `generate`: Random floats in a range and prime/composite sequences.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod compare;
pub mod eval;
pub mod generate;
pub mod ops;
pub mod predicates;
pub mod traits;
