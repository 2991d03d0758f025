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

//! Debug printing of sequences, one element per line, with a blank line
//! before the first element and after the last.
//!
//! ```rust
//! use seglib_seq::print::write_to;
//!
//! let mut out = Vec::new();
//! write_to(&mut out, &[1, 2]).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "\n1\n2\n\n");
//! ```

use std::{
    fmt::Display,
    io::{self, Write},
};

/// Writes every element of `seq` to `writer` on its own line, framed by a
/// leading and a trailing blank line, then flushes.
pub fn write_to<W, T>(writer: &mut W, seq: &[T]) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Display,
{
    writeln!(writer)?;
    for element in seq {
        writeln!(writer, "{}", element)?;
    }
    writeln!(writer)?;
    writer.flush()
}

/// Writes `seq` to standard output in the [`write_to`] format.
pub fn print<T>(seq: &[T]) -> io::Result<()>
where
    T: Display,
{
    write_to(&mut io::stdout().lock(), seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<T: Display>(seq: &[T]) -> String {
        let mut out = Vec::new();
        write_to(&mut out, seq).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_sequence_prints_two_blank_lines() {
        assert_eq!(render::<i32>(&[]), "\n\n");
    }

    #[test]
    fn test_elements_one_per_line() {
        assert_eq!(render(&["alpha", "beta"]), "\nalpha\nbeta\n\n");
        assert_eq!(render(&[1.5_f64]), "\n1.5\n\n");
    }

    #[test]
    fn test_print_to_stdout_succeeds() {
        assert!(print(&[1, 2, 3]).is_ok());
    }
}
