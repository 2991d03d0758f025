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

//! Chunking of a field sequence, with the same policy as
//! [`seglib_seq::distribute::distribute`].

use crate::{extract::extract, handle::Member};
use seglib_seq::distribute::{RemainderPolicy, distribute};

/// Extracts the field of every object and partitions the values into `parts`
/// contiguous chunks according to `policy`.
///
/// # Examples
///
/// ```rust
/// # use seglib_member::{distribute::distribute_member, member, RemainderPolicy};
/// struct Job { id: u32 }
///
/// let jobs: Vec<Job> = (1..=5).map(|id| Job { id }).collect();
/// assert_eq!(
///     distribute_member(&jobs, member!(Job, id), 2, RemainderPolicy::Spread),
///     vec![vec![1, 2, 5], vec![3, 4]]
/// );
/// ```
pub fn distribute_member<C, M>(
    objects: &[C],
    member: Member<C, M>,
    parts: usize,
    policy: RemainderPolicy,
) -> Vec<Vec<M>>
where
    M: Clone,
{
    distribute(&extract(objects, member), parts, policy)
}
