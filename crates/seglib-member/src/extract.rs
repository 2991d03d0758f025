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

//! # Extraction Functions
//!
//! Project one field out of every object of a sequence, in input order.
//!
//! - [`extract`]: clones of the field.
//! - [`extract_linked`]: [`LinkedMember`] working copies still bound to
//!   their objects, for edit-then-commit workflows.
//! - [`extract_transform`] / [`extract_operative_transform`]: the field mapped
//!   through a unary / binary function into any result type.
//! - [`extract_operate`] / [`extract_operate_in_place`]: the field updated with
//!   a binary function; the `_in_place` form also writes the new values back
//!   into the objects.
//!
//! ```rust
//! use seglib_member::{extract::extract_linked, member};
//!
//! struct Cell { value: i32 }
//!
//! let mut cells = vec![Cell { value: 1 }, Cell { value: 2 }, Cell { value: 3 }];
//! let mut links = extract_linked(&mut cells, member!(Cell, value));
//! for link in links.iter_mut() {
//!     *link.value_mut() *= 100;
//! }
//! links[1].commit();
//! drop(links);
//!
//! assert_eq!(cells.iter().map(|c| c.value).collect::<Vec<_>>(), vec![1, 200, 3]);
//! ```

use crate::{handle::Member, linked::LinkedMember};

/// Returns a clone of the field of every object.
pub fn extract<C, M>(objects: &[C], member: Member<C, M>) -> Vec<M>
where
    M: Clone,
{
    objects.iter().map(|o| member.cloned(o)).collect()
}

/// Returns a [`LinkedMember`] for the field of every object.
pub fn extract_linked<C, M>(objects: &mut [C], member: Member<C, M>) -> Vec<LinkedMember<'_, C, M>>
where
    M: Clone,
{
    objects
        .iter_mut()
        .map(|o| LinkedMember::new(o, member))
        .collect()
}

/// Returns `f(&field)` for every object.
pub fn extract_transform<C, M, R, F>(objects: &[C], member: Member<C, M>, mut f: F) -> Vec<R>
where
    F: FnMut(&M) -> R,
{
    objects.iter().map(|o| f(member.get(o))).collect()
}

/// Returns `f(&field, operand)` for every object, leaving the objects untouched.
pub fn extract_operate<C, M, V, F>(objects: &[C], member: Member<C, M>, operand: &V, f: F) -> Vec<M>
where
    V: ?Sized,
    F: FnMut(&M, &V) -> M,
{
    extract_operative_transform(objects, member, operand, f)
}

/// Replaces the field of every object with `f(&field, operand)` and returns
/// the new values.
///
/// # Examples
///
/// ```rust
/// # use seglib_member::{extract::extract_operate_in_place, member};
/// struct Obj { score: i32 }
///
/// let mut objs = vec![Obj { score: 1 }, Obj { score: 7 }];
/// let scores = extract_operate_in_place(&mut objs, member!(Obj, score), &1, |s, inc| s + inc);
/// assert_eq!(scores, vec![2, 8]);
/// assert_eq!(objs[0].score, 2);
/// ```
pub fn extract_operate_in_place<C, M, V, F>(
    objects: &mut [C],
    member: Member<C, M>,
    operand: &V,
    mut f: F,
) -> Vec<M>
where
    M: Clone,
    V: ?Sized,
    F: FnMut(&M, &V) -> M,
{
    objects
        .iter_mut()
        .map(|o| {
            let updated = f(member.get(o), operand);
            member.set(o, updated.clone());
            updated
        })
        .collect()
}

/// Returns `f(&field, operand)` for every object, where the result type may
/// differ from the field type.
pub fn extract_operative_transform<C, M, V, R, F>(
    objects: &[C],
    member: Member<C, M>,
    operand: &V,
    mut f: F,
) -> Vec<R>
where
    V: ?Sized,
    F: FnMut(&M, &V) -> R,
{
    objects.iter().map(|o| f(member.get(o), operand)).collect()
}
