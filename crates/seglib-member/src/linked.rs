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

//! # Linked Members
//!
//! A [`LinkedMember`] is a detached working copy of one field, still bound to
//! the object it was read from. Edits go to the working copy only until they
//! are explicitly [`commit`](LinkedMember::commit)ted back, and
//! [`restore`](LinkedMember::restore) discards them by re-reading the source.
//!
//! The link borrows its source object mutably for its whole lifetime, so the
//! object cannot be changed behind the link's back.
//!
//! ```rust
//! use seglib_member::{member, LinkedMember};
//!
//! #[derive(Clone)]
//! struct Tank { level: u32 }
//!
//! let mut tank = Tank { level: 10 };
//! let mut link = LinkedMember::new(&mut tank, member!(Tank, level));
//!
//! *link.value_mut() += 5;
//! assert!(link.is_dirty());
//! assert_eq!(link.class().level, 10);
//!
//! link.commit();
//! assert!(!link.is_dirty());
//! assert_eq!(tank.level, 15);
//! ```

use crate::handle::Member;
use std::fmt::Debug;

/// A working copy of one field of a borrowed object.
pub struct LinkedMember<'a, C, M> {
    class: &'a mut C,
    member: Member<C, M>,
    value: M,
}

impl<'a, C, M> LinkedMember<'a, C, M>
where
    M: Clone,
{
    /// Links to `class` and initialises the working copy from its field.
    #[inline]
    pub fn new(class: &'a mut C, member: Member<C, M>) -> Self {
        let value = member.cloned(class);
        Self {
            class,
            member,
            value,
        }
    }

    /// Discards uncommitted edits by re-reading the field from the source.
    #[inline]
    pub fn restore(&mut self) {
        self.value = self.member.cloned(self.class);
    }

    /// Writes the working copy back into the source object.
    #[inline]
    pub fn commit(&mut self) {
        self.member.set(self.class, self.value.clone());
    }
}

impl<'a, C, M> LinkedMember<'a, C, M> {
    /// Returns the source object.
    #[inline]
    pub fn class(&self) -> &C {
        self.class
    }

    /// Returns the source object mutably. Writes made through it to the
    /// linked field are picked up by the next [`restore`](Self::restore)
    /// and overwritten by the next [`commit`](Self::commit).
    #[inline]
    pub fn class_mut(&mut self) -> &mut C {
        self.class
    }

    /// Returns an owned copy of the source object, as it currently stands.
    #[inline]
    pub fn copy_class(&self) -> C
    where
        C: Clone,
    {
        self.class.clone()
    }

    /// Returns the handle this link projects through.
    #[inline]
    pub fn member(&self) -> Member<C, M> {
        self.member
    }

    /// Returns the working copy.
    #[inline]
    pub fn value(&self) -> &M {
        &self.value
    }

    /// Returns the working copy mutably.
    #[inline]
    pub fn value_mut(&mut self) -> &mut M {
        &mut self.value
    }

    /// Replaces the working copy.
    #[inline]
    pub fn set_value(&mut self, value: M) {
        self.value = value;
    }

    /// Returns `true` if the working copy differs from the source field.
    #[inline]
    pub fn is_dirty(&self) -> bool
    where
        M: PartialEq,
    {
        self.value != *self.member.get(self.class)
    }

    /// Consumes the link, returning the working copy without committing it.
    #[inline]
    pub fn into_value(self) -> M {
        self.value
    }
}

impl<'a, C, M> Debug for LinkedMember<'a, C, M>
where
    C: Debug,
    M: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedMember")
            .field("class", &self.class)
            .field("value", &self.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member;

    #[derive(Debug, Clone, PartialEq)]
    struct Sensor {
        id: u32,
        label: String,
        reading: f64,
    }

    fn sensor() -> Sensor {
        Sensor {
            id: 7,
            label: "north".to_string(),
            reading: 1.5,
        }
    }

    #[test]
    fn test_new_copies_current_value() {
        let mut s = sensor();
        let link = LinkedMember::new(&mut s, member!(Sensor, label));
        assert_eq!(link.value(), "north");
        assert!(!link.is_dirty());
    }

    #[test]
    fn test_edits_are_invisible_until_commit() {
        let mut s = sensor();
        let mut link = LinkedMember::new(&mut s, member!(Sensor, reading));
        link.set_value(9.0);
        assert_eq!(link.class().reading, 1.5);
        assert!(link.is_dirty());
        link.commit();
        assert_eq!(link.class().reading, 9.0);
        assert_eq!(s.reading, 9.0);
    }

    #[test]
    fn test_restore_discards_uncommitted_edits() {
        let mut s = sensor();
        let mut link = LinkedMember::new(&mut s, member!(Sensor, label));
        link.value_mut().push_str("-east");
        link.restore();
        assert_eq!(link.value(), "north");
        assert!(!link.is_dirty());
        assert_eq!(s.label, "north");
    }

    #[test]
    fn test_restore_picks_up_source_changes() {
        let mut s = sensor();
        let mut link = LinkedMember::new(&mut s, member!(Sensor, id));
        link.class_mut().id = 99;
        assert!(link.is_dirty());
        link.restore();
        assert_eq!(*link.value(), 99);
    }

    #[test]
    fn test_copy_class_is_independent() {
        let mut s = sensor();
        let mut link = LinkedMember::new(&mut s, member!(Sensor, id));
        let snapshot = link.copy_class();
        link.set_value(1);
        link.commit();
        assert_eq!(snapshot.id, 7);
        assert_eq!(link.class().id, 1);
    }

    #[test]
    fn test_into_value_does_not_commit() {
        let mut s = sensor();
        let mut link = LinkedMember::new(&mut s, member!(Sensor, id));
        link.set_value(3);
        assert_eq!(link.into_value(), 3);
        assert_eq!(s.id, 7);
    }

    #[test]
    fn test_debug_shows_class_and_value() {
        let mut s = sensor();
        let link = LinkedMember::new(&mut s, member!(Sensor, id));
        let rendered = format!("{:?}", link);
        assert!(rendered.contains("LinkedMember"));
        assert!(rendered.contains("value: 7"));
    }
}
