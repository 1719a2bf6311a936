//! Factorization by wheel trial division.
//!
//! Targets are at most 2^63, so trial division up to the square root always finishes, though it
//! can take a few seconds when the two largest prime factors are both close to 2^31.

use crate::primality::is_prime64;
use crate::traits::ExactRoots;

/// Increments of the 2-3-5 wheel starting from 7, skipping multiples of 2, 3 and 5
const WHEEL_SPOKES: [u64; 8] = [4, 2, 4, 2, 4, 6, 2, 6];

/// Divide out every factor of `p` from `residual`, appending `p` once per division.
fn divide_out(residual: &mut u64, p: u64, factors: &mut Vec<u64>) {
    while *residual % p == 0 {
        *residual /= p;
        factors.push(p);
    }
}

/// Find all prime factors of `target` by trial division, in ascending order with multiplicity.
///
/// 0 and 1 have no prime factorization and give an empty list.
pub fn factors64(target: u64) -> Vec<u64> {
    if target < 2 {
        return Vec::new();
    }
    if is_prime64(target) {
        return vec![target];
    }
    if let Some(root) = target.sqrt_exact() {
        if is_prime64(root) {
            return vec![root, root];
        }
    }

    let mut residual = target;
    let mut factors = Vec::new();
    for p in [2, 3, 5] {
        divide_out(&mut residual, p, &mut factors);
    }

    let mut candidate = 7u64;
    let mut spoke = 0;
    while candidate <= residual / candidate {
        divide_out(&mut residual, candidate, &mut factors);
        candidate += WHEEL_SPOKES[spoke];
        spoke = (spoke + 1) % WHEEL_SPOKES.len();
    }

    // the residual has no factor below its square root
    if residual > 1 {
        factors.push(residual);
    }
    factors
}

/// Return the prime factors of `|num|` in ascending order with multiplicity.
///
/// `i64::MIN` is factored as 2^63.
pub fn prime_factors(num: i64) -> Vec<i64> {
    factors64(num.unsigned_abs())
        .into_iter()
        .map(|p| p as i64)
        .collect()
}
