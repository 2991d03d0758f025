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

//! # Member Handles
//!
//! A [`Member<C, M>`] identifies one field of type `M` inside values of type
//! `C` by a pair of accessor function pointers: one for shared access and one
//! for exclusive access. The handle is `Copy` and carries no reference to any
//! particular object, so a single handle can be applied to every element of
//! a collection.
//!
//! ## Construction
//!
//! The [`member!`](crate::member) macro generates both accessors from a field
//! path:
//!
//! ```rust
//! use seglib_member::member;
//!
//! struct Point { x: f64, y: f64 }
//! struct Segment { start: Point, end: Point }
//!
//! let x = member!(Point, x);
//! let end_y = member!(Segment, end.y);
//!
//! let mut s = Segment { start: Point { x: 1.0, y: 2.0 }, end: Point { x: 3.0, y: 4.0 } };
//! assert_eq!(*end_y.get(&s), 4.0);
//! end_y.set(&mut s, 9.0);
//! assert_eq!(s.end.y, 9.0);
//! assert_eq!(*x.get(&s.start), 1.0);
//! ```
//!
//! Because the accessors are ordinary field expressions, Rust's privacy rules
//! apply. A handle to a private field can only be created inside the module
//! that can see the field:
//!
//! ```compile_fail
//! mod shapes {
//!     pub struct Circle { radius: f64 }
//! }
//!
//! let r = seglib_member::member!(shapes::Circle, radius); // error: field `radius` is private
//! ```
//!
//! Handles may also be assembled from explicit functions with
//! [`Member::new`], which accepts any non-capturing closures of the right
//! shape, e.g. to project into a tuple struct or an array element.

use std::fmt::Debug;

/// Builds a [`Member`] handle for a field (or nested field path) of a type.
///
/// ```rust
/// use seglib_member::member;
///
/// struct Pair(u8, u8);
/// let second = member!(Pair, 1);
/// assert_eq!(*second.get(&Pair(4, 9)), 9);
/// ```
#[macro_export]
macro_rules! member {
    ($class:ty, $($field:tt).+) => {
        $crate::handle::Member::<$class, _>::new(
            |object: &$class| &object.$($field).+,
            |object: &mut $class| &mut object.$($field).+,
        )
    };
}

/// A copyable handle to a field of type `M` inside values of type `C`.
pub struct Member<C, M> {
    get: fn(&C) -> &M,
    get_mut: fn(&mut C) -> &mut M,
}

impl<C, M> Member<C, M> {
    /// Creates a handle from a shared and an exclusive accessor.
    ///
    /// Both accessors must project to the same field; this is what
    /// [`member!`](crate::member) guarantees.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seglib_member::Member;
    /// struct Cell { value: [i32; 2] }
    ///
    /// let first: Member<Cell, i32> = Member::new(|c| &c.value[0], |c| &mut c.value[0]);
    /// assert_eq!(*first.get(&Cell { value: [7, 8] }), 7);
    /// ```
    #[inline]
    pub const fn new(get: fn(&C) -> &M, get_mut: fn(&mut C) -> &mut M) -> Self {
        Self { get, get_mut }
    }

    /// Returns a shared reference to the field inside `object`.
    #[inline(always)]
    pub fn get<'a>(&self, object: &'a C) -> &'a M {
        (self.get)(object)
    }

    /// Returns an exclusive reference to the field inside `object`.
    #[inline(always)]
    pub fn get_mut<'a>(&self, object: &'a mut C) -> &'a mut M {
        (self.get_mut)(object)
    }

    /// Overwrites the field inside `object` with `value`.
    #[inline]
    pub fn set(&self, object: &mut C, value: M) {
        *self.get_mut(object) = value;
    }

    /// Overwrites the field inside `object` with `value`, returning the old value.
    #[inline]
    pub fn replace(&self, object: &mut C, value: M) -> M {
        std::mem::replace(self.get_mut(object), value)
    }

    /// Returns a copy of the field inside `object`.
    #[inline]
    pub fn cloned(&self, object: &C) -> M
    where
        M: Clone,
    {
        self.get(object).clone()
    }
}

impl<C, M> Clone for Member<C, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, M> Copy for Member<C, M> {}

impl<C, M> Debug for Member<C, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Member<{}, {}>",
            std::any::type_name::<C>(),
            std::any::type_name::<M>()
        )
    }
}
