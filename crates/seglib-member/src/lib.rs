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

//! # Seglib Members
//!
//! Attribute-wise operations over objects. A [`Member<C, M>`] is a copyable
//! handle naming one field of type `M` inside objects of type `C`; every
//! function in this crate takes such a handle and applies its comparison,
//! filter, transformation or extraction to that field rather than to whole
//! objects.
//!
//! Handles are built with the [`member!`] macro from a field that is visible
//! at the call site, so naming a private or nonexistent field is a compile
//! error rather than a runtime failure.
//!
//! ## Modules
//!
//! - `handle`: The `Member<C, M>` handle and the `member!` constructor macro.
//! - `linked`: `LinkedMember`, a working copy of one field bound to its
//!   source object with explicit `commit` and `restore`.
//! - `compare`: Field-to-field and field-to-value comparisons.
//! - `operate`: Unary and binary field updates on one object or a sequence.
//! - `filter`: Inclusion and exclusion of objects by a field's value.
//! - `extract`: Projection of a field out of every object of a sequence.
//! - `distribute`: Chunking of an extracted field sequence.
//! - `print`: One-field-per-line debug output.
//!
//! ## Example
//!
//! ```rust
//! use seglib_member::{extract, filter, member};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Player {
//!     name: &'static str,
//!     score: i32,
//! }
//!
//! let mut players = vec![
//!     Player { name: "ada", score: 5 },
//!     Player { name: "bob", score: 3 },
//!     Player { name: "cy", score: 5 },
//! ];
//! let score = member!(Player, score);
//!
//! assert_eq!(filter::equality_inclusion_in_place(&mut players, score, &5), 1);
//! let bumped = extract::extract_operate_in_place(&mut players, score, &1, |s, inc| s + inc);
//! assert_eq!(bumped, vec![6, 6]);
//! assert_eq!(players[1].score, 6);
//! ```
//!
//! [`Member<C, M>`]: handle::Member

pub mod compare;
pub mod distribute;
pub mod extract;
pub mod filter;
pub mod handle;
pub mod linked;
pub mod operate;
pub mod print;

pub use handle::Member;
pub use linked::LinkedMember;
pub use seglib_seq::RemainderPolicy;
