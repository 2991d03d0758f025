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

//! # Transformational Functions
//!
//! Element-wise maps. [`transform`] changes the element type with a unary
//! function; the `operate` family combines each element with a shared
//! operand, either keeping the element type ([`operate`], [`operate_in_place`])
//! or producing a new one ([`operative_transform`]).
//!
//! ```rust
//! use seglib_seq::transform::{operate_in_place, transform};
//!
//! let lengths = transform(&["a", "abc"], |s| s.len());
//! assert_eq!(lengths, vec![1, 3]);
//!
//! let mut prices = vec![10, 20];
//! operate_in_place(&mut prices, &3, |p, inc| p + inc);
//! assert_eq!(prices, vec![13, 23]);
//! ```

/// Returns `f(x)` for every element `x` of `seq`.
pub fn transform<T, R, F>(seq: &[T], f: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    seq.iter().map(f).collect()
}

/// Returns `f(x, operand)` for every element `x` of `seq`.
pub fn operate<T, V, F>(seq: &[T], operand: &V, mut f: F) -> Vec<T>
where
    V: ?Sized,
    F: FnMut(&T, &V) -> T,
{
    seq.iter().map(|x| f(x, operand)).collect()
}

/// Replaces every element `x` of `seq` with `f(x, operand)`.
pub fn operate_in_place<T, V, F>(seq: &mut [T], operand: &V, mut f: F)
where
    V: ?Sized,
    F: FnMut(&T, &V) -> T,
{
    for x in seq.iter_mut() {
        *x = f(&*x, operand);
    }
}

/// Returns `f(x, operand)` for every element `x` of `seq`, where the result
/// type may differ from the element type.
pub fn operative_transform<T, V, R, F>(seq: &[T], operand: &V, mut f: F) -> Vec<R>
where
    V: ?Sized,
    F: FnMut(&T, &V) -> R,
{
    seq.iter().map(|x| f(x, operand)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_changes_type_and_keeps_order() {
        let out: Vec<String> = transform(&[3, 1, 2], |x| format!("#{x}"));
        assert_eq!(out, vec!["#3", "#1", "#2"]);
    }

    #[test]
    fn test_transform_empty() {
        let out: Vec<u8> = transform(&Vec::<i32>::new(), |_| 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_operate_does_not_mutate_source() {
        let src = vec![1.0_f64, 2.0, 4.0];
        let scaled = operate(&src, &0.5, |x, k| x * k);
        assert_eq!(scaled, vec![0.5, 1.0, 2.0]);
        assert_eq!(src, vec![1.0, 2.0, 4.0]);
    }

    #[test]
    fn test_operate_in_place_matches_operate() {
        let src = vec![5, -2, 9];
        let mut v = src.clone();
        operate_in_place(&mut v, &10, |x, m| x * m);
        assert_eq!(v, operate(&src, &10, |x, m| x * m));
    }

    #[test]
    fn test_operative_transform_with_unsized_operand() {
        let names = ["ada", "bob"];
        let greetings = operative_transform(&names, "hi ", |n, prefix| format!("{prefix}{n}"));
        assert_eq!(greetings, vec!["hi ada", "hi bob"]);
    }
}
