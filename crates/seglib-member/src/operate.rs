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

//! # Field Operations
//!
//! Update one field through a [`Member`] handle, either on a copy of the
//! object (returning the copy) or on the object itself (`_in_place`).
//!
//! - `operate*`: binary, the new value is `f(&field, operand)`.
//! - `apply*`: unary, the new value is `f(&field)`.
//! - The `*_all*` forms do the same for every object of a sequence.
//!
//! ```rust
//! use seglib_member::{member, operate::{apply_all_in_place, operate}};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Item { price: u32 }
//!
//! let price = member!(Item, price);
//! let item = Item { price: 100 };
//! assert_eq!(operate(&item, price, &20, |p, off| p - off), Item { price: 80 });
//! assert_eq!(item.price, 100);
//!
//! let mut items = vec![Item { price: 1 }, Item { price: 2 }];
//! apply_all_in_place(&mut items, price, |p| p * 10);
//! assert_eq!(items, vec![Item { price: 10 }, Item { price: 20 }]);
//! ```

use crate::handle::Member;

/// Returns a copy of `object` whose field is replaced by `f(&field, operand)`.
pub fn operate<C, M, V, F>(object: &C, member: Member<C, M>, operand: &V, f: F) -> C
where
    C: Clone,
    V: ?Sized,
    F: FnOnce(&M, &V) -> M,
{
    let mut copy = object.clone();
    operate_in_place(&mut copy, member, operand, f);
    copy
}

/// Replaces the field of `object` with `f(&field, operand)`.
pub fn operate_in_place<C, M, V, F>(object: &mut C, member: Member<C, M>, operand: &V, f: F)
where
    V: ?Sized,
    F: FnOnce(&M, &V) -> M,
{
    let updated = f(member.get(object), operand);
    member.set(object, updated);
}

/// Returns a copy of `object` whose field is replaced by `f(&field)`.
pub fn apply<C, M, F>(object: &C, member: Member<C, M>, f: F) -> C
where
    C: Clone,
    F: FnOnce(&M) -> M,
{
    let mut copy = object.clone();
    apply_in_place(&mut copy, member, f);
    copy
}

/// Replaces the field of `object` with `f(&field)`.
pub fn apply_in_place<C, M, F>(object: &mut C, member: Member<C, M>, f: F)
where
    F: FnOnce(&M) -> M,
{
    let updated = f(member.get(object));
    member.set(object, updated);
}

/// Returns copies of `objects` with every field replaced by `f(&field, operand)`.
pub fn operate_all<C, M, V, F>(objects: &[C], member: Member<C, M>, operand: &V, f: F) -> Vec<C>
where
    C: Clone,
    V: ?Sized,
    F: FnMut(&M, &V) -> M,
{
    let mut copies = objects.to_vec();
    operate_all_in_place(&mut copies, member, operand, f);
    copies
}

/// Replaces the field of every object in `objects` with `f(&field, operand)`.
pub fn operate_all_in_place<C, M, V, F>(objects: &mut [C], member: Member<C, M>, operand: &V, mut f: F)
where
    V: ?Sized,
    F: FnMut(&M, &V) -> M,
{
    for object in objects.iter_mut() {
        operate_in_place(object, member, operand, &mut f);
    }
}

/// Returns copies of `objects` with every field replaced by `f(&field)`.
pub fn apply_all<C, M, F>(objects: &[C], member: Member<C, M>, f: F) -> Vec<C>
where
    C: Clone,
    F: FnMut(&M) -> M,
{
    let mut copies = objects.to_vec();
    apply_all_in_place(&mut copies, member, f);
    copies
}

/// Replaces the field of every object in `objects` with `f(&field)`.
pub fn apply_all_in_place<C, M, F>(objects: &mut [C], member: Member<C, M>, mut f: F)
where
    F: FnMut(&M) -> M,
{
    for object in objects.iter_mut() {
        apply_in_place(object, member, &mut f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member;

    #[derive(Debug, Clone, PartialEq)]
    struct Task {
        name: String,
        priority: u8,
    }

    fn tasks() -> Vec<Task> {
        vec![
            Task {
                name: "build".to_string(),
                priority: 1,
            },
            Task {
                name: "test".to_string(),
                priority: 4,
            },
        ]
    }

    #[test]
    fn test_operate_returns_modified_copy() {
        let t = tasks().remove(0);
        let bumped = operate(&t, member!(Task, priority), &2, |p, inc| p + inc);
        assert_eq!(bumped.priority, 3);
        assert_eq!(bumped.name, "build");
        assert_eq!(t.priority, 1);
    }

    #[test]
    fn test_operate_in_place_mutates() {
        let mut t = tasks().remove(1);
        operate_in_place(&mut t, member!(Task, name), "-ci", |n, suffix| format!("{n}{suffix}"));
        assert_eq!(t.name, "test-ci");
    }

    #[test]
    fn test_apply_and_apply_in_place() {
        let mut t = tasks().remove(0);
        let upper = apply(&t, member!(Task, name), |n| n.to_uppercase());
        assert_eq!(upper.name, "BUILD");
        assert_eq!(t.name, "build");

        apply_in_place(&mut t, member!(Task, priority), |p| p.saturating_sub(5));
        assert_eq!(t.priority, 0);
    }

    #[test]
    fn test_operate_all_leaves_source_untouched() {
        let src = tasks();
        let out = operate_all(&src, member!(Task, priority), &10, |p, m| p * m);
        assert_eq!(out.iter().map(|t| t.priority).collect::<Vec<_>>(), vec![10, 40]);
        assert_eq!(src, tasks());
    }

    #[test]
    fn test_operate_all_in_place_matches_operate_all() {
        let src = tasks();
        let mut v = tasks();
        let double = |p: &u8, k: &u8| p * k;
        operate_all_in_place(&mut v, member!(Task, priority), &2, double);
        assert_eq!(v, operate_all(&src, member!(Task, priority), &2, double));
    }

    #[test]
    fn test_apply_all_in_place_visits_every_object_in_order() {
        let mut v = tasks();
        let mut order = Vec::new();
        apply_all_in_place(&mut v, member!(Task, name), |n| {
            order.push(n.clone());
            n.repeat(2)
        });
        assert_eq!(order, vec!["build", "test"]);
        assert_eq!(
            apply_all(&tasks(), member!(Task, name), |n| n.repeat(2)),
            v
        );
    }

    #[test]
    fn test_operate_all_on_empty_sequence() {
        let mut v: Vec<Task> = Vec::new();
        operate_all_in_place(&mut v, member!(Task, priority), &1, |p, k| p + k);
        assert!(v.is_empty());
    }
}
