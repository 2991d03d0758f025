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

//! # Sequence Algebra
//!
//! Set operations over ordered sequences, defined by `PartialEq` alone. Every
//! result is de-duplicated, so each distinct value appears at most once.
//!
//! ## Ordering
//!
//! Results are ordered by first occurrence in the sequence the operation
//! scans: [`intersection`] and [`difference`] follow the order of their first
//! argument, while [`union`] and [`symmetric_difference`] follow the order of
//! the concatenation of their parts. Neither argument's original order is
//! otherwise preserved in a union.

use crate::modify::{append, make_unique_in_place};

/// Returns every distinct element of `a` and `b`.
///
/// # Examples
///
/// ```rust
/// # use seglib_seq::algebra::union;
/// assert_eq!(union(&[3, 1, 3], &[2, 1, 4]), vec![3, 1, 2, 4]);
/// ```
pub fn union<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut out = append(a, b);
    make_unique_in_place(&mut out);
    out
}

/// Returns the distinct elements of `a` that also occur in `b`, in `a`'s order.
///
/// # Examples
///
/// ```rust
/// # use seglib_seq::algebra::intersection;
/// assert_eq!(intersection(&[1, 2, 2, 3], &[3, 2]), vec![2, 3]);
/// ```
pub fn intersection<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut out: Vec<T> = a.iter().filter(|x| b.contains(x)).cloned().collect();
    make_unique_in_place(&mut out);
    out
}

/// Returns the distinct elements of `base` that do not occur in `comparison`.
///
/// # Examples
///
/// ```rust
/// # use seglib_seq::algebra::difference;
/// assert_eq!(difference(&[1, 2, 2, 3], &[3]), vec![1, 2]);
/// ```
pub fn difference<T>(base: &[T], comparison: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut out: Vec<T> = base
        .iter()
        .filter(|x| !comparison.contains(x))
        .cloned()
        .collect();
    make_unique_in_place(&mut out);
    out
}

/// Returns the distinct elements occurring in exactly one of `a` and `b`:
/// `difference(a, b)` followed by `difference(b, a)`.
///
/// # Examples
///
/// ```rust
/// # use seglib_seq::algebra::symmetric_difference;
/// assert_eq!(symmetric_difference(&[1, 2, 3], &[3, 4, 4]), vec![1, 2, 4]);
/// ```
pub fn symmetric_difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut out = append(&difference(a, b), &difference(b, a));
    make_unique_in_place(&mut out);
    out
}
