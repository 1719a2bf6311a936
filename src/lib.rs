//! Primality, factorization, prime navigation and prime counting on 64-bit signed integers.

mod count;
mod factor;
mod integer;
mod oracle;
mod primality;
mod sequence;
mod sieve;
mod tables;
mod traits;

pub mod nt_funcs;
pub mod riemann;

pub use count::{CountConfig, CountResult, PrimeCounter};
pub use factor::prime_factors;
pub use oracle::{Offline, OracleError, PrimecountCli};
pub use primality::is_prime;
pub use sequence::{
    goldbach_pair, is_balanced_prime, next_prime, nth_palprime, previous_prime, prime_sum,
    primes_iter, random_prime, random_prime_with, related_primes, PrimeIter,
};
pub use tables::{
    ANCHORS, FERMAT_PRIMES, MAX_PRIME, MAX_SAFE_JS_NUMBER, MERSENNE_PRIMES, MIN_PRIME,
    PERFECT_NUMBERS,
};
pub use traits::{ExactCountOracle, ExactRoots};

pub mod detail {
    pub use super::primality::is_sprp;
    pub use super::sieve::{primes, sieve_count};
    pub use super::tables::{MOEBIUS, WITNESSES};
}
