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

//! # Generative Functions
//!
//! Producers of numbers: uniformly distributed random floats within a range,
//! and sequences of primes or composites found by repeated primality tests.
//!
//! The prime and composite generators scan candidates one by one with
//! [`is_prime`], so producing `n` values costs `O(n · √k)` where `k` is the
//! largest value emitted. They are meant for small counts.

use crate::num::predicates::{is_composite, is_prime};
use num_traits::Float;
use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};

/// First candidate examined by [`generate_primes`].
pub const PRIME_SCAN_START: u64 = 5;

/// First candidate examined by [`generate_composites`].
pub const COMPOSITE_SCAN_START: u64 = 0;

/// Returns `minimum + u · (maximum - minimum)` for a uniform sample `u` in `[0, 1)`.
///
/// Samples come from the thread-local generator returned by [`rand::rng`],
/// which is seeded from the operating system. Results are therefore not
/// reproducible across runs; use [`rand_float_in_range_with`] with a seeded
/// generator when reproducibility matters.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::generate::rand_float_in_range;
/// let v = rand_float_in_range(-1.0_f32, 1.0);
/// assert!((-1.0..1.0).contains(&v));
/// ```
pub fn rand_float_in_range<T>(minimum: T, maximum: T) -> T
where
    T: Float,
    StandardUniform: Distribution<T>,
{
    rand_float_in_range_with(&mut rand::rng(), minimum, maximum)
}

/// Like [`rand_float_in_range`], but draws the sample from `rng`.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::generate::rand_float_in_range_with;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut a = StdRng::seed_from_u64(7);
/// let mut b = StdRng::seed_from_u64(7);
/// assert_eq!(
///     rand_float_in_range_with(&mut a, 0.0_f64, 10.0),
///     rand_float_in_range_with(&mut b, 0.0_f64, 10.0),
/// );
/// ```
pub fn rand_float_in_range_with<T, R>(rng: &mut R, minimum: T, maximum: T) -> T
where
    T: Float,
    R: Rng,
    StandardUniform: Distribution<T>,
{
    let unit: T = rng.random();
    minimum + unit * (maximum - minimum)
}

/// Returns the first `limit` primes found scanning upward from
/// [`PRIME_SCAN_START`].
///
/// The scan starts at 5, so 2 and 3 are never emitted.
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::generate::generate_primes;
/// assert_eq!(generate_primes(5), vec![5, 7, 11, 13, 17]);
/// assert!(generate_primes(0).is_empty());
/// ```
pub fn generate_primes(limit: usize) -> Vec<u64> {
    (PRIME_SCAN_START..)
        .filter(|&candidate| is_prime(candidate))
        .take(limit)
        .collect()
}

/// Returns the first `limit` composite numbers found scanning upward from
/// [`COMPOSITE_SCAN_START`].
///
/// # Examples
///
/// ```rust
/// # use seglib_core::num::generate::generate_composites;
/// assert_eq!(generate_composites(6), vec![4, 6, 8, 9, 10, 12]);
/// ```
pub fn generate_composites(limit: usize) -> Vec<u64> {
    (COMPOSITE_SCAN_START..)
        .filter(|&candidate| is_composite(candidate))
        .take(limit)
        .collect()
}
