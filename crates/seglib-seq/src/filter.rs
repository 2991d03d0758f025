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

//! # Inclusion and Exclusion Filters
//!
//! Three families of filters, each available as a copying function and as
//! an `_in_place` variant:
//!
//! - `conditional_*`: keep elements for which a unary predicate holds
//!   (`inclusion`) or does not hold (`exclusion`).
//! - `comparative_*`: like `conditional_*`, but the predicate is a binary
//!   comparator applied as `comparator(element, comparison)`.
//! - `equality_*`: keep elements equal (`inclusion`) or unequal
//!   (`exclusion`) to a fixed value.
//!
//! Copying variants leave their input untouched and return the kept
//! elements. In-place variants retain the kept elements in the given `Vec`, in
//! their original relative order, and return how many were removed.
//!
//! ```rust
//! use seglib_seq::filter::{comparative_exclusion, equality_inclusion_in_place};
//!
//! assert_eq!(comparative_exclusion(&[1, 5, 2, 8], &4, |a, b| a > b), vec![1, 2]);
//!
//! let mut v = vec![1, 2, 1, 3];
//! assert_eq!(equality_inclusion_in_place(&mut v, &1), 2);
//! assert_eq!(v, vec![1, 1]);
//! ```

/// Returns the elements of `seq` for which `predicate` returns `true`.
pub fn conditional_inclusion<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    seq.iter().filter(|&x| predicate(x)).cloned().collect()
}

/// Keeps only the elements for which `predicate` returns `true` and returns
/// the number removed.
pub fn conditional_inclusion_in_place<T, P>(seq: &mut Vec<T>, predicate: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let before = seq.len();
    seq.retain(predicate);
    before - seq.len()
}

/// Returns the elements of `seq` for which `predicate` returns `false`.
pub fn conditional_exclusion<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    conditional_inclusion(seq, |x| !predicate(x))
}

/// Keeps only the elements for which `predicate` returns `false` and returns
/// the number removed.
pub fn conditional_exclusion_in_place<T, P>(seq: &mut Vec<T>, mut predicate: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    conditional_inclusion_in_place(seq, |x| !predicate(x))
}

/// Returns the elements `x` of `seq` for which `comparator(x, comparison)` is `true`.
pub fn comparative_inclusion<T, U, C>(seq: &[T], comparison: &U, mut comparator: C) -> Vec<T>
where
    T: Clone,
    U: ?Sized,
    C: FnMut(&T, &U) -> bool,
{
    conditional_inclusion(seq, |x| comparator(x, comparison))
}

/// In-place form of [`comparative_inclusion`]; returns the number removed.
pub fn comparative_inclusion_in_place<T, U, C>(
    seq: &mut Vec<T>,
    comparison: &U,
    mut comparator: C,
) -> usize
where
    U: ?Sized,
    C: FnMut(&T, &U) -> bool,
{
    conditional_inclusion_in_place(seq, |x| comparator(x, comparison))
}

/// Returns the elements `x` of `seq` for which `comparator(x, comparison)` is `false`.
pub fn comparative_exclusion<T, U, C>(seq: &[T], comparison: &U, mut comparator: C) -> Vec<T>
where
    T: Clone,
    U: ?Sized,
    C: FnMut(&T, &U) -> bool,
{
    conditional_exclusion(seq, |x| comparator(x, comparison))
}

/// In-place form of [`comparative_exclusion`]; returns the number removed.
pub fn comparative_exclusion_in_place<T, U, C>(
    seq: &mut Vec<T>,
    comparison: &U,
    mut comparator: C,
) -> usize
where
    U: ?Sized,
    C: FnMut(&T, &U) -> bool,
{
    conditional_exclusion_in_place(seq, |x| comparator(x, comparison))
}

/// Returns the elements of `seq` equal to `value`.
pub fn equality_inclusion<T>(seq: &[T], value: &T) -> Vec<T>
where
    T: PartialEq + Clone,
{
    conditional_inclusion(seq, |x| x == value)
}

/// Keeps only the elements equal to `value` and returns the number removed.
pub fn equality_inclusion_in_place<T>(seq: &mut Vec<T>, value: &T) -> usize
where
    T: PartialEq,
{
    conditional_inclusion_in_place(seq, |x| x == value)
}

/// Returns the elements of `seq` not equal to `value`.
pub fn equality_exclusion<T>(seq: &[T], value: &T) -> Vec<T>
where
    T: PartialEq + Clone,
{
    conditional_exclusion(seq, |x| x == value)
}

/// Removes every element equal to `value` and returns the number removed.
pub fn equality_exclusion_in_place<T>(seq: &mut Vec<T>, value: &T) -> usize
where
    T: PartialEq,
{
    conditional_exclusion_in_place(seq, |x| x == value)
}
