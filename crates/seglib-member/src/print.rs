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

//! Debug printing of one field per object, in the format of
//! [`seglib_seq::print::write_to`].

use crate::handle::Member;
use std::{
    fmt::Display,
    io::{self, Write},
};

/// Writes the field of every object to `writer` on its own line, framed by
/// a leading and a trailing blank line, then flushes.
///
/// # Examples
///
/// ```rust
/// # use seglib_member::{member, print::write_member_to};
/// struct City { name: &'static str }
///
/// let cities = [City { name: "Kiel" }, City { name: "Bonn" }];
/// let mut out = Vec::new();
/// write_member_to(&mut out, &cities, member!(City, name)).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "\nKiel\nBonn\n\n");
/// ```
pub fn write_member_to<W, C, M>(writer: &mut W, objects: &[C], member: Member<C, M>) -> io::Result<()>
where
    W: Write + ?Sized,
    M: Display,
{
    writeln!(writer)?;
    for object in objects {
        writeln!(writer, "{}", member.get(object))?;
    }
    writeln!(writer)?;
    writer.flush()
}

/// Writes the field of every object to standard output in the
/// [`write_member_to`] format.
pub fn print_member<C, M>(objects: &[C], member: Member<C, M>) -> io::Result<()>
where
    M: Display,
{
    write_member_to(&mut io::stdout().lock(), objects, member)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member;

    struct Reading {
        celsius: f32,
    }

    #[test]
    fn test_write_member_to_formats_one_per_line() {
        let readings = [Reading { celsius: 21.5 }, Reading { celsius: -3.0 }];
        let mut out = Vec::new();
        write_member_to(&mut out, &readings, member!(Reading, celsius)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\n21.5\n-3\n\n");
    }

    #[test]
    fn test_write_member_to_empty() {
        let mut out = Vec::new();
        write_member_to(&mut out, &[] as &[Reading], member!(Reading, celsius)).unwrap();
        assert_eq!(out, b"\n\n");
    }

    #[test]
    fn test_print_member_to_stdout_succeeds() {
        let readings = [Reading { celsius: 0.0 }];
        assert!(print_member(&readings, member!(Reading, celsius)).is_ok());
    }
}
