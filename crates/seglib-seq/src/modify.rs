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

//! # Modification Functions
//!
//! Concatenation, removal by index and stable de-duplication.
//!
//! De-duplication compares every incoming element against the elements that
//! were already accepted, which is `O(n²)` comparisons but only needs
//! `PartialEq`. The first occurrence of each distinct value is kept, in its
//! original relative order.

use crate::error::SeqError;

/// Returns `a` followed by `b`.
///
/// # Examples
///
/// ```rust
/// # use seglib_seq::modify::append;
/// assert_eq!(append(&[1, 2], &[3]), vec![1, 2, 3]);
/// ```
pub fn append<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Clone,
{
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}

/// Returns a copy of `seq` with the element at `index` removed.
///
/// An out-of-bounds `index` is not an error: the copy is returned unchanged.
///
/// # Examples
///
/// ```rust
/// # use seglib_seq::modify::erase;
/// assert_eq!(erase(&[1, 2, 3], 1), vec![1, 3]);
/// assert_eq!(erase(&[1, 2, 3], 9), vec![1, 2, 3]);
/// ```
pub fn erase<T>(seq: &[T], index: usize) -> Vec<T>
where
    T: Clone,
{
    let mut out = seq.to_vec();
    if index < out.len() {
        out.remove(index);
    }
    out
}

/// Removes and returns the element at `index`, shifting later elements left.
///
/// # Errors
///
/// Returns [`SeqError::IndexOutOfBounds`] and leaves `seq` untouched if
/// `index >= seq.len()`.
///
/// # Examples
///
/// ```rust
/// # use seglib_seq::{modify::erase_in_place, SeqError};
/// let mut v = vec!['a', 'b', 'c'];
/// assert_eq!(erase_in_place(&mut v, 0), Ok('a'));
/// assert_eq!(v, vec!['b', 'c']);
/// assert_eq!(
///     erase_in_place(&mut v, 2),
///     Err(SeqError::IndexOutOfBounds { index: 2, len: 2 })
/// );
/// ```
pub fn erase_in_place<T>(seq: &mut Vec<T>, index: usize) -> Result<T, SeqError> {
    if index >= seq.len() {
        return Err(SeqError::IndexOutOfBounds {
            index,
            len: seq.len(),
        });
    }
    Ok(seq.remove(index))
}

/// Returns the distinct elements of `seq` in first-occurrence order.
///
/// # Examples
///
/// ```rust
/// # use seglib_seq::modify::make_unique;
/// assert_eq!(make_unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn make_unique<T>(seq: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut out: Vec<T> = Vec::with_capacity(seq.len());
    for item in seq {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// De-duplicates `seq` in place, keeping first occurrences in order, and
/// returns the number of elements removed.
///
/// # Examples
///
/// ```rust
/// # use seglib_seq::modify::make_unique_in_place;
/// let mut v = vec![3, 1, 3, 2, 1];
/// assert_eq!(make_unique_in_place(&mut v), 2);
/// assert_eq!(v, vec![3, 1, 2]);
/// ```
pub fn make_unique_in_place<T>(seq: &mut Vec<T>) -> usize
where
    T: PartialEq,
{
    let before = seq.len();
    let mut accepted: Vec<T> = Vec::with_capacity(before);
    for item in seq.drain(..) {
        if !accepted.contains(&item) {
            accepted.push(item);
        }
    }
    *seq = accepted;
    before - seq.len()
}
