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

//! # Distribution
//!
//! Splits a sequence into `n` contiguous chunks of `len / n` elements each.
//! The `len % n` trailing elements that do not fit evenly are handled by a
//! [`RemainderPolicy`]: either handed out one per chunk to the leading chunks
//! (in order) or dropped.
//!
//! ```rust
//! use seglib_seq::distribute::{distribute, RemainderPolicy};
//!
//! let seq: Vec<i32> = (1..=10).collect();
//!
//! let spread = distribute(&seq, 3, RemainderPolicy::Spread);
//! assert_eq!(spread, vec![vec![1, 2, 3, 10], vec![4, 5, 6], vec![7, 8, 9]]);
//!
//! let dropped = distribute(&seq, 3, RemainderPolicy::Drop);
//! assert_eq!(dropped, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
//! ```

use std::fmt::Display;

/// What to do with the elements left over after equal-sized chunking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RemainderPolicy {
    /// Append the leftover elements one each to the first chunks.
    #[default]
    Spread,
    /// Discard the leftover elements so that every chunk has the same size.
    Drop,
}

impl Display for RemainderPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spread => write!(f, "Spread"),
            Self::Drop => write!(f, "Drop"),
        }
    }
}

/// Partitions `seq` into `parts` chunks according to `policy`.
///
/// Always returns exactly `parts` chunks when `parts > 1`; chunks may be
/// empty when `seq` is shorter than `parts`. When `parts <= 1` the result is
/// a single chunk holding the whole of `seq`, regardless of `policy`.
pub fn distribute<T>(seq: &[T], parts: usize, policy: RemainderPolicy) -> Vec<Vec<T>>
where
    T: Clone,
{
    if parts <= 1 {
        return vec![seq.to_vec()];
    }

    let chunk_len = seq.len() / parts;
    let even_len = chunk_len * parts;

    let mut chunks: Vec<Vec<T>> = (0..parts)
        .map(|i| {
            let start = i * chunk_len;
            seq[start..start + chunk_len].to_vec()
        })
        .collect();

    if policy == RemainderPolicy::Spread {
        for (chunk, leftover) in chunks.iter_mut().zip(&seq[even_len..]) {
            chunk.push(leftover.clone());
        }
    }

    chunks
}
