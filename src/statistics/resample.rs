//! Index resampling and deterministic seed derivation.
//!
//! Every resampling iteration gets its own RNG, seeded from the base seed and
//! the iteration index. Results therefore do not depend on how iterations are
//! scheduled across threads.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Counter-based RNG seed generation using SplitMix64.
///
/// This is a stateless PRF that generates deterministic, well-distributed
/// seeds from a base seed and counter. Using this instead of simple addition
/// avoids sequential correlation between neighbouring iterations.
///
/// # Arguments
///
/// * `base_seed` - Base random seed
/// * `counter` - Iteration counter (0, 1, 2, ...)
#[inline]
pub fn counter_rng_seed(base_seed: u64, counter: u64) -> u64 {
    // SplitMix64: https://xoshiro.di.unimi.it/splitmix64.c
    let mut z = base_seed.wrapping_add(counter.wrapping_mul(0x9e3779b97f4a7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Base seed of independent stream `stream` derived from a user seed.
///
/// Stream 0 is the user seed itself, so a single-stream run and the first
/// stream of a multi-stream run produce the same draws.
#[inline]
pub fn stream_seed(seed: u64, stream: u64) -> u64 {
    if stream == 0 {
        seed
    } else {
        counter_rng_seed(seed ^ 0x5851f42d4c957f2d, stream)
    }
}

/// Fresh RNG for iteration `i` of the stream rooted at `base_seed`.
#[inline]
pub fn iteration_rng(base_seed: u64, i: usize) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(counter_rng_seed(base_seed, i as u64))
}

/// Draw `out.len()` indices uniformly from `[0, n)` with replacement.
///
/// # Panics
///
/// Panics if `n == 0` and `out` is non-empty.
pub fn resample_with_replacement_into<R: Rng>(n: usize, rng: &mut R, out: &mut [usize]) {
    for idx in out.iter_mut() {
        *idx = rng.random_range(0..n);
    }
}

/// Copy `data` into `out` and apply a uniformly random permutation.
///
/// # Panics
///
/// Panics if `out.len() != data.len()`.
pub fn permute_into<R: Rng>(data: &[f64], rng: &mut R, out: &mut [f64]) {
    out.copy_from_slice(data);
    out.shuffle(rng);
}

/// Gather `data[indices[k]]` into `out[k]`.
///
/// # Panics
///
/// Panics if `out.len() != indices.len()` or an index is out of bounds.
pub fn gather_into(data: &[f64], indices: &[usize], out: &mut [f64]) {
    assert_eq!(
        out.len(),
        indices.len(),
        "Output buffer must have same length as index buffer"
    );
    for (slot, &idx) in out.iter_mut().zip(indices) {
        *slot = data[idx];
    }
}
