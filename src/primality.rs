//! Deterministic Miller-Rabin primality test over the full 64-bit range

use crate::tables::{WITNESSES, WITNESSES_31BIT};
use num_modular::{ModularCoreOps, ModularPow};

/// Test if `target` is a strong probable prime to `base`.
///
/// `target` must be odd and larger than `base`.
pub fn is_sprp(target: u64, base: u64) -> bool {
    // find 2^shift*u + 1 = n
    let tm1 = target - 1;
    let shift = tm1.trailing_zeros();
    let u = tm1 >> shift;

    let mut x = base.powm(u, &target);
    if x == 1 || x == tm1 {
        return true;
    }

    for _ in 1..shift {
        x = x.mulm(x, &target);
        if x == tm1 {
            return true;
        }
        if x == 1 {
            return false;
        }
    }
    false
}

/// This function does a deterministic primality test on a u64 integer.
///
/// Targets up to `i32::MAX` are settled by the bases 2, 3, 5, 7, everything else by the
/// first twelve primes, which have no strong pseudoprime below 3.3 * 10^24.
pub fn is_prime64(target: u64) -> bool {
    // shortcuts
    if target < 2 {
        return false;
    }
    if WITNESSES.contains(&target) {
        return true;
    }
    if WITNESSES.iter().any(|&p| target % p == 0) {
        return false;
    }

    let bases = if target <= i32::MAX as u64 {
        &WITNESSES[..WITNESSES_31BIT]
    } else {
        &WITNESSES[..]
    };
    bases.iter().all(|&a| is_sprp(target, a))
}

/// Return whether `n` is a prime. Negative numbers, 0 and 1 are not.
#[inline]
pub fn is_prime(n: i64) -> bool {
    n >= 2 && is_prime64(n as u64)
}
