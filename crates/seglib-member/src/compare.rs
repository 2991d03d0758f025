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

//! # Comparison Functions
//!
//! Read-only comparisons between fields. The two objects may be of different
//! types, and the two fields of different types, as long as the comparison
//! itself is defined between them.
//!
//! ```rust
//! use seglib_member::{compare::{compare, compare_variable_predicate}, member};
//!
//! struct Order { quantity: u32 }
//! struct Stock { available: u32 }
//!
//! let order = Order { quantity: 3 };
//! let stock = Stock { available: 3 };
//!
//! assert!(compare(&order, member!(Order, quantity), &stock, member!(Stock, available)));
//! assert!(compare_variable_predicate(&order, member!(Order, quantity), &10, |q, max| q < max));
//! ```

use crate::handle::Member;

/// Returns `true` if the field `m1` of `a` equals the field `m2` of `b`.
#[inline]
pub fn compare<C1, M1, C2, M2>(a: &C1, m1: Member<C1, M1>, b: &C2, m2: Member<C2, M2>) -> bool
where
    M1: PartialEq<M2>,
{
    m1.get(a) == m2.get(b)
}

/// Returns `predicate(a.m1, b.m2)`.
#[inline]
pub fn compare_predicate<C1, M1, C2, M2, P>(
    a: &C1,
    m1: Member<C1, M1>,
    b: &C2,
    m2: Member<C2, M2>,
    predicate: P,
) -> bool
where
    P: FnOnce(&M1, &M2) -> bool,
{
    predicate(m1.get(a), m2.get(b))
}

/// Returns `true` if the field `member` of `object` equals `value`.
#[inline]
pub fn compare_variable<C, M, V>(object: &C, member: Member<C, M>, value: &V) -> bool
where
    M: PartialEq<V>,
    V: ?Sized,
{
    member.get(object) == value
}

/// Returns `predicate(object.member, value)`.
#[inline]
pub fn compare_variable_predicate<C, M, V, P>(
    object: &C,
    member: Member<C, M>,
    value: &V,
    predicate: P,
) -> bool
where
    V: ?Sized,
    P: FnOnce(&M, &V) -> bool,
{
    predicate(member.get(object), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member;

    struct Book {
        title: String,
        pages: u32,
    }

    struct Review {
        book_title: &'static str,
        pages_read: u32,
    }

    fn book() -> Book {
        Book {
            title: "Dune".to_string(),
            pages: 412,
        }
    }

    #[test]
    fn test_compare_across_types() {
        let review = Review {
            book_title: "Dune",
            pages_read: 100,
        };
        assert!(compare(
            &book(),
            member!(Book, title),
            &review,
            member!(Review, book_title)
        ));
        assert!(!compare(
            &book(),
            member!(Book, pages),
            &review,
            member!(Review, pages_read)
        ));
    }

    #[test]
    fn test_compare_predicate() {
        let review = Review {
            book_title: "Dune",
            pages_read: 100,
        };
        let finished = |pages: &u32, read: &u32| read >= pages;
        assert!(!compare_predicate(
            &book(),
            member!(Book, pages),
            &review,
            member!(Review, pages_read),
            finished
        ));
    }

    #[test]
    fn test_compare_variable_with_unsized_value() {
        assert!(compare_variable(&book(), member!(Book, title), "Dune"));
        assert!(!compare_variable(&book(), member!(Book, title), "Emma"));
        assert!(compare_variable(&book(), member!(Book, pages), &412));
    }

    #[test]
    fn test_compare_variable_predicate() {
        let longer_than = |pages: &u32, limit: &u32| pages > limit;
        assert!(compare_variable_predicate(&book(), member!(Book, pages), &400, longer_than));
        assert!(!compare_variable_predicate(&book(), member!(Book, pages), &500, longer_than));
    }

    #[test]
    fn test_comparisons_do_not_mutate() {
        let b = book();
        let _ = compare_variable(&b, member!(Book, pages), &0);
        assert_eq!(b.pages, 412);
        assert_eq!(b.title, "Dune");
    }
}
