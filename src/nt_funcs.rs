//! Standalone number theoretic functions that can be used without building a [PrimeCounter]

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::count::{CountResult, PrimeCounter};
use crate::factor::prime_factors;

pub use crate::factor::factors64;
pub use crate::primality::{is_prime, is_prime64};
pub use crate::sequence::{
    goldbach_pair, is_balanced_prime, next_prime, nth_palprime, prime_sum, previous_prime,
    random_prime, related_primes,
};

/// This function re-exports [PrimeCounter::prime_count()] with the default `primecount` backend
pub fn prime_count(x: i64) -> CountResult {
    PrimeCounter::default().prime_count(x)
}

/// This function re-exports [PrimeCounter::nth_prime()] with the default `primecount` backend
pub fn nth_prime(n: i64) -> Option<i64> {
    PrimeCounter::default().nth_prime(n)
}

/// Greatest common divisor of `|a|` and `|b|`, with gcd(0, 0) = 0
pub fn gcd(a: i64, b: i64) -> u64 {
    a.unsigned_abs().gcd(&b.unsigned_abs())
}

/// Least common multiple of `|a|` and `|b|`.
///
/// The result can exceed 64 bits, and it is zero if either argument is zero.
pub fn lcm(a: i64, b: i64) -> BigUint {
    let (a, b) = (a.unsigned_abs(), b.unsigned_abs());
    if a == 0 || b == 0 {
        return BigUint::zero();
    }
    BigUint::from(a / a.gcd(&b)) * BigUint::from(b)
}

/// Check whether `a` and `b` share no common factor
pub fn are_coprime(a: i64, b: i64) -> bool {
    gcd(a, b) == 1
}

/// Check whether `|num|` has exactly `k` prime factors counted with multiplicity.
///
/// With `k = 2` this is the semiprime test.
pub fn is_almost_prime(num: i64, k: usize) -> bool {
    prime_factors(num).len() == k
}
