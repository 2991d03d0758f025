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

//! Linear-scan queries: membership, positions and counts.

/// Returns `true` if `element` occurs in `seq`.
///
/// # Examples
///
/// ```rust
/// # use seglib_seq::query::contains_element;
/// assert!(contains_element(&[1, 2, 3], &2));
/// assert!(!contains_element(&[1, 2, 3], &4));
/// ```
#[inline]
pub fn contains_element<T>(seq: &[T], element: &T) -> bool
where
    T: PartialEq,
{
    seq.iter().any(|x| x == element)
}

/// Returns the index of the first occurrence of `element`, or `None`.
///
/// # Examples
///
/// ```rust
/// # use seglib_seq::query::find_element;
/// assert_eq!(find_element(&['a', 'b', 'a'], &'a'), Some(0));
/// assert_eq!(find_element(&['a', 'b', 'a'], &'z'), None);
/// ```
#[inline]
pub fn find_element<T>(seq: &[T], element: &T) -> Option<usize>
where
    T: PartialEq,
{
    seq.iter().position(|x| x == element)
}

/// Returns the indices of every occurrence of `element`, ascending.
///
/// # Examples
///
/// ```rust
/// # use seglib_seq::query::find_all_element;
/// assert_eq!(find_all_element(&[7, 1, 7, 7], &7), vec![0, 2, 3]);
/// ```
pub fn find_all_element<T>(seq: &[T], element: &T) -> Vec<usize>
where
    T: PartialEq,
{
    seq.iter()
        .enumerate()
        .filter_map(|(i, x)| (x == element).then_some(i))
        .collect()
}

/// Returns the number of occurrences of `element`.
///
/// # Examples
///
/// ```rust
/// # use seglib_seq::query::count_element;
/// assert_eq!(count_element(&[7, 1, 7, 7], &7), 3);
/// assert_eq!(count_element(&[7, 1, 7, 7], &2), 0);
/// ```
#[inline]
pub fn count_element<T>(seq: &[T], element: &T) -> usize
where
    T: PartialEq,
{
    seq.iter().filter(|&x| x == element).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_on_empty() {
        let empty: [i32; 0] = [];
        assert!(!contains_element(&empty, &0));
        assert_eq!(find_element(&empty, &0), None);
        assert!(find_all_element(&empty, &0).is_empty());
        assert_eq!(count_element(&empty, &0), 0);
    }

    #[test]
    fn test_queries_agree() {
        let seq = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        for needle in 0..10 {
            let all = find_all_element(&seq, &needle);
            assert_eq!(all.len(), count_element(&seq, &needle));
            assert_eq!(all.first().copied(), find_element(&seq, &needle));
            assert_eq!(!all.is_empty(), contains_element(&seq, &needle));
            assert!(all.iter().all(|&i| seq[i] == needle));
        }
    }

    #[test]
    fn test_find_element_returns_first_match() {
        let seq = ["b", "a", "b"];
        assert_eq!(find_element(&seq, &"b"), Some(0));
        assert_eq!(find_all_element(&seq, &"b"), vec![0, 2]);
    }
}
