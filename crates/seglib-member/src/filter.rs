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

//! # Object Filters
//!
//! The inclusion and exclusion filters of [`seglib_seq::filter`], applied to
//! sequences of objects but deciding on one field per object. The kept
//! objects are returned (or retained) whole and in their original order;
//! `_in_place` variants return the number of objects removed.

use crate::handle::Member;
use seglib_seq::filter as seq;

/// Returns the objects whose field equals `value`.
pub fn equality_inclusion<C, M, V>(objects: &[C], member: Member<C, M>, value: &V) -> Vec<C>
where
    C: Clone,
    M: PartialEq<V>,
    V: ?Sized,
{
    seq::conditional_inclusion(objects, |o| member.get(o) == value)
}

/// Keeps the objects whose field equals `value`; returns the number removed.
///
/// # Examples
///
/// ```rust
/// # use seglib_member::{filter::equality_inclusion_in_place, member};
/// struct Obj { score: i32 }
///
/// let mut objs: Vec<Obj> = [5, 3, 5, 1].into_iter().map(|score| Obj { score }).collect();
/// assert_eq!(equality_inclusion_in_place(&mut objs, member!(Obj, score), &5), 2);
/// assert!(objs.iter().all(|o| o.score == 5));
/// ```
pub fn equality_inclusion_in_place<C, M, V>(objects: &mut Vec<C>, member: Member<C, M>, value: &V) -> usize
where
    M: PartialEq<V>,
    V: ?Sized,
{
    seq::conditional_inclusion_in_place(objects, |o| member.get(o) == value)
}

/// Returns the objects whose field does not equal `value`.
pub fn equality_exclusion<C, M, V>(objects: &[C], member: Member<C, M>, value: &V) -> Vec<C>
where
    C: Clone,
    M: PartialEq<V>,
    V: ?Sized,
{
    seq::conditional_exclusion(objects, |o| member.get(o) == value)
}

/// Removes the objects whose field equals `value`; returns the number removed.
pub fn equality_exclusion_in_place<C, M, V>(objects: &mut Vec<C>, member: Member<C, M>, value: &V) -> usize
where
    M: PartialEq<V>,
    V: ?Sized,
{
    seq::conditional_exclusion_in_place(objects, |o| member.get(o) == value)
}

/// Returns the objects for which `predicate(&field)` holds.
pub fn conditional_inclusion<C, M, P>(objects: &[C], member: Member<C, M>, mut predicate: P) -> Vec<C>
where
    C: Clone,
    P: FnMut(&M) -> bool,
{
    seq::conditional_inclusion(objects, |o| predicate(member.get(o)))
}

/// Keeps the objects for which `predicate(&field)` holds; returns the number removed.
pub fn conditional_inclusion_in_place<C, M, P>(
    objects: &mut Vec<C>,
    member: Member<C, M>,
    mut predicate: P,
) -> usize
where
    P: FnMut(&M) -> bool,
{
    seq::conditional_inclusion_in_place(objects, |o| predicate(member.get(o)))
}

/// Returns the objects for which `predicate(&field)` does not hold.
pub fn conditional_exclusion<C, M, P>(objects: &[C], member: Member<C, M>, mut predicate: P) -> Vec<C>
where
    C: Clone,
    P: FnMut(&M) -> bool,
{
    seq::conditional_exclusion(objects, |o| predicate(member.get(o)))
}

/// Removes the objects for which `predicate(&field)` holds; returns the number removed.
pub fn conditional_exclusion_in_place<C, M, P>(
    objects: &mut Vec<C>,
    member: Member<C, M>,
    mut predicate: P,
) -> usize
where
    P: FnMut(&M) -> bool,
{
    seq::conditional_exclusion_in_place(objects, |o| predicate(member.get(o)))
}

/// Returns the objects for which `comparator(&field, comparison)` holds.
pub fn comparative_inclusion<C, M, V, F>(
    objects: &[C],
    member: Member<C, M>,
    comparison: &V,
    mut comparator: F,
) -> Vec<C>
where
    C: Clone,
    V: ?Sized,
    F: FnMut(&M, &V) -> bool,
{
    seq::conditional_inclusion(objects, |o| comparator(member.get(o), comparison))
}

/// Keeps the objects for which `comparator(&field, comparison)` holds;
/// returns the number removed.
pub fn comparative_inclusion_in_place<C, M, V, F>(
    objects: &mut Vec<C>,
    member: Member<C, M>,
    comparison: &V,
    mut comparator: F,
) -> usize
where
    V: ?Sized,
    F: FnMut(&M, &V) -> bool,
{
    seq::conditional_inclusion_in_place(objects, |o| comparator(member.get(o), comparison))
}

/// Returns the objects for which `comparator(&field, comparison)` does not hold.
pub fn comparative_exclusion<C, M, V, F>(
    objects: &[C],
    member: Member<C, M>,
    comparison: &V,
    mut comparator: F,
) -> Vec<C>
where
    C: Clone,
    V: ?Sized,
    F: FnMut(&M, &V) -> bool,
{
    seq::conditional_exclusion(objects, |o| comparator(member.get(o), comparison))
}

/// Removes the objects for which `comparator(&field, comparison)` holds;
/// returns the number removed.
pub fn comparative_exclusion_in_place<C, M, V, F>(
    objects: &mut Vec<C>,
    member: Member<C, M>,
    comparison: &V,
    mut comparator: F,
) -> usize
where
    V: ?Sized,
    F: FnMut(&M, &V) -> bool,
{
    seq::conditional_exclusion_in_place(objects, |o| comparator(member.get(o), comparison))
}
