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

//! # Seglib Sequences
//!
//! Set-like algebra and filtering over ordered sequences. Inputs are slices of
//! equality-comparable elements; outputs are freshly allocated `Vec`s unless
//! the function carries an `_in_place` suffix, in which case it mutates a
//! `Vec` it is given and reports how many elements it removed.
//!
//! ## Modules
//!
//! - `modify`: Concatenation, erasure by index and stable de-duplication.
//! - `algebra`: Union, intersection, difference and symmetric difference,
//!   each followed by a de-duplication pass.
//! - `query`: Membership, first/all positions and occurrence counts.
//! - `filter`: Inclusion and exclusion by unary predicate, by binary
//!   comparator against a fixed value, or by equality with a fixed value.
//! - `transform`: Element-wise mapping, optionally combined with an operand.
//! - `distribute`: Partitioning into `n` contiguous, near-equal chunks.
//! - `print`: One-element-per-line debug output.
//! - `error`: The error type for the few fallible operations.
//!
//! ## Complexity
//!
//! Everything relies on `PartialEq` alone, never on `Hash` or `Ord`, so
//! de-duplication and the set operations are quadratic in the input length.
//! They are intended for small sequences.
//!
//! ```rust
//! use seglib_seq::{algebra, filter, modify};
//!
//! let a = vec![1, 2, 2, 3];
//! let b = vec![3, 4];
//!
//! assert_eq!(algebra::union(&a, &b), vec![1, 2, 3, 4]);
//! assert_eq!(algebra::intersection(&a, &b), vec![3]);
//! assert_eq!(filter::conditional_inclusion(&a, |v| v % 2 == 1), vec![1, 3]);
//!
//! let mut c = a.clone();
//! assert_eq!(modify::make_unique_in_place(&mut c), 1);
//! ```

pub mod algebra;
pub mod distribute;
pub mod error;
pub mod filter;
pub mod modify;
pub mod print;
pub mod query;
pub mod transform;

pub use distribute::RemainderPolicy;
pub use error::SeqError;
