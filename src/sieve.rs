//! Bit-packed sieve of Eratosthenes for small bounds

use bitvec::bitvec;

/// Returns all primes **below** limit. The primes are sorted.
///
/// Only odd numbers are stored in the sieve, one bit each.
pub fn primes(limit: u64) -> Vec<u64> {
    if limit <= 2 {
        return Vec::new();
    }

    // bit i stands for 2i+3
    let odd_count = ((limit - 2) / 2) as usize;
    let mut composite = bitvec![0; odd_count];
    let mut p = 3u64;
    while p * p < limit {
        if !composite[((p - 3) / 2) as usize] {
            for multi in (p * p..limit).step_by(2 * p as usize) {
                composite.set(((multi - 3) / 2) as usize, true);
            }
        }
        p += 2;
    }

    let mut list = Vec::with_capacity(odd_count / 4 + 1);
    list.push(2);
    list.extend(composite.iter_zeros().map(|x| (x as u64) * 2 + 3));
    list
}

/// Count the primes not exceeding `x` by sieving
pub fn sieve_count(x: u64) -> usize {
    primes(x + 1).len()
}
