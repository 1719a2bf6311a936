//! Navigation through the sequence of primes: neighbours, random picks, special families.

use crate::primality::{is_prime, is_prime64};
use crate::tables::{MAX_PRIME, MIN_PRIME};
use rand::Rng;

/// Lazy iterator over all primes in `i64`, starting from 2.
///
/// Every call to [primes_iter] restarts the sequence.
#[derive(Debug, Clone)]
pub struct PrimeIter {
    next: Option<i64>,
}

impl Iterator for PrimeIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let current = self.next?;
        self.next = next_prime(current);
        Some(current)
    }
}

/// Return an iterator over the primes 2, 3, 5, 7, .. up to [MAX_PRIME]
pub fn primes_iter() -> PrimeIter {
    PrimeIter {
        next: Some(MIN_PRIME),
    }
}

/// Return the smallest prime strictly greater than `num`.
///
/// There is none for `num >= MAX_PRIME`.
pub fn next_prime(num: i64) -> Option<i64> {
    if num >= MAX_PRIME {
        return None;
    }
    if num < MIN_PRIME {
        return Some(MIN_PRIME);
    }

    // first odd number above num
    let mut current = num + 1 + num % 2;
    while current <= MAX_PRIME {
        if is_prime(current) {
            return Some(current);
        }
        current += 2;
    }
    None
}

/// Return the largest prime strictly less than `num`.
///
/// There is none for `num <= 2`. Every `num` above [MAX_PRIME] gives [MAX_PRIME].
pub fn previous_prime(num: i64) -> Option<i64> {
    if num <= MIN_PRIME {
        return None;
    }
    if num > MAX_PRIME {
        return Some(MAX_PRIME);
    }

    // first odd number below num
    let mut current = num - 1 - num % 2;
    while current >= 3 {
        if is_prime(current) {
            return Some(current);
        }
        current -= 2;
    }
    Some(MIN_PRIME)
}

/// Pick a random prime in the inclusive range `[start, end]`.
///
/// A uniformly random point of the range (clamped to `[MIN_PRIME, MAX_PRIME]`) is probed
/// forward, wrapping around at the end of the range. Returns `None` if the range is empty or
/// holds no prime. The cost is linear in the size of the range in the worst case.
pub fn random_prime(start: i64, end: i64) -> Option<i64> {
    random_prime_with(&mut rand::thread_rng(), start, end)
}

/// Same as [random_prime] with a caller supplied random source
pub fn random_prime_with<R: Rng>(rng: &mut R, start: i64, end: i64) -> Option<i64> {
    if start > end {
        return None;
    }
    let lower = start.max(MIN_PRIME);
    let upper = end.min(MAX_PRIME);
    if lower > upper {
        return None;
    }

    let origin = rng.gen_range(lower..=upper);
    let mut candidate = origin;
    loop {
        if is_prime(candidate) {
            return Some(candidate);
        }
        candidate = if candidate == upper { lower } else { candidate + 1 };
        if candidate == origin {
            return None;
        }
    }
}

/// The first five palindromic primes. 11 is the only one with an even number of digits,
/// every other even-length palindrome is a multiple of 11.
const SMALL_PALPRIMES: [i64; 5] = [2, 3, 5, 7, 11];

/// Return the `n`-th palindromic prime, counting 2 as the first.
///
/// Candidates are odd-length palindromes built by mirroring a seed around its last digit. A
/// seed whose leading digit is 0, 2, 4, 5, 6 or 8 would end the palindrome in that digit, so
/// the whole block of seeds sharing that leading digit is skipped.
///
/// # Panics
/// If `n < 1`, or if the answer does not fit in an `i64`.
pub fn nth_palprime(n: i32) -> i64 {
    assert!(n >= 1, "palindromic primes are counted from 1");
    if n as usize <= SMALL_PALPRIMES.len() {
        return SMALL_PALPRIMES[n as usize - 1];
    }

    let mut count = SMALL_PALPRIMES.len() as i32;
    let mut seed = 10u64;
    loop {
        let mut leading = seed;
        let mut block = 1u64;
        while leading > 9 {
            leading /= 10;
            block *= 10;
        }
        if matches!(leading, 0 | 2 | 4 | 5 | 6 | 8) {
            seed = (leading + 1) * block;
            continue;
        }

        let palindrome = mirror(seed).filter(|&p| p <= i64::MAX as u64);
        let palindrome = match palindrome {
            Some(p) => p,
            None => panic!("the {}-th palindromic prime exceeds the i64 range", n),
        };
        if is_prime64(palindrome) {
            count += 1;
            if count == n {
                return palindrome as i64;
            }
        }
        seed += 1;
    }
}

/// Append the digits of `seed`, except its last one, in reverse order: 123 -> 12321
fn mirror(seed: u64) -> Option<u64> {
    let mut palindrome = seed;
    let mut reverse = seed / 10;
    while reverse > 0 {
        palindrome = palindrome.checked_mul(10)?.checked_add(reverse % 10)?;
        reverse /= 10;
    }
    Some(palindrome)
}

/// Find two primes summing to the even number `num`, with the smaller one as small as possible.
///
/// Returns `None` for odd numbers or numbers below 4, or if no pair is found.
pub fn goldbach_pair(num: i64) -> Option<(i64, i64)> {
    if num < 4 || num % 2 != 0 {
        return None;
    }
    if is_prime(num - 2) {
        return Some((2, num - 2));
    }

    let mut i = 3;
    while i <= num / 2 {
        if is_prime(i) && is_prime(num - i) {
            return Some((i, num - i));
        }
        i += 2;
    }
    None
}

/// Return `num - difference` and `num + difference`, in this order, keeping those that are
/// prime. A sum that would overflow `i64` is left out. Non-positive differences give nothing.
pub fn related_primes(num: i64, difference: i64) -> Vec<i64> {
    let mut related = Vec::with_capacity(2);
    if difference <= 0 {
        return related;
    }
    if let Some(lower) = num.checked_sub(difference) {
        if lower >= MIN_PRIME && is_prime(lower) {
            related.push(lower);
        }
    }
    if let Some(upper) = num.checked_add(difference) {
        if is_prime(upper) {
            related.push(upper);
        }
    }
    related
}

/// Sum of the first `n` primes. The caller keeps `n` small enough for the sum to fit.
pub fn prime_sum(n: i32) -> i64 {
    primes_iter().take(n.max(0) as usize).sum()
}

/// Test if `num` is a prime that is the arithmetic mean of its neighbouring primes
pub fn is_balanced_prime(num: i64) -> bool {
    if !is_prime(num) {
        return false;
    }
    match (previous_prime(num), next_prime(num)) {
        (Some(prev), Some(next)) => next - num == num - prev,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sieve::primes;
    use rand::random;

    #[test]
    fn next_prime_test() {
        assert_eq!(next_prime(i64::MIN), Some(2));
        assert_eq!(next_prime(1), Some(2));
        assert_eq!(next_prime(2), Some(3));
        assert_eq!(next_prime(3), Some(5));
        assert_eq!(next_prime(24), Some(29));
        assert_eq!(next_prime(100), Some(101));
        assert_eq!(next_prime(2147483646), Some(2147483647));
        assert_eq!(next_prime(MAX_PRIME - 1), Some(MAX_PRIME));
        assert_eq!(next_prime(MAX_PRIME), None);
        assert_eq!(next_prime(i64::MAX), None);
    }

    #[test]
    fn previous_prime_test() {
        assert_eq!(previous_prime(i64::MIN), None);
        assert_eq!(previous_prime(2), None);
        assert_eq!(previous_prime(3), Some(2));
        assert_eq!(previous_prime(4), Some(3));
        assert_eq!(previous_prime(5), Some(3));
        assert_eq!(previous_prime(100), Some(97));
        assert_eq!(previous_prime(MAX_PRIME), Some(9223372036854775643));
        assert_eq!(previous_prime(MAX_PRIME + 1), Some(MAX_PRIME));
        assert_eq!(previous_prime(i64::MAX), Some(MAX_PRIME));
    }

    #[test]
    fn neighbours_roundtrip_test() {
        let sieved = primes(10_000);
        for pair in sieved.windows(2) {
            let (p, q) = (pair[0] as i64, pair[1] as i64);
            assert_eq!(next_prime(p), Some(q));
            assert_eq!(previous_prime(q), Some(p));
            assert_eq!(previous_prime(p).and_then(next_prime).unwrap_or(p), p);
        }
        for _ in 0..50 {
            let n = (random::<u64>() >> 2) as i64 + 2;
            let p = next_prime(n).unwrap();
            assert_eq!(next_prime(previous_prime(p).unwrap()), Some(p));
        }
    }

    #[test]
    fn primes_iter_test() {
        let sieved: Vec<i64> = primes(1000).into_iter().map(|p| p as i64).collect();
        assert_eq!(primes_iter().take(sieved.len()).collect::<Vec<_>>(), sieved);
        // restarting gives the same sequence
        assert_eq!(primes_iter().take(5).collect::<Vec<_>>(), [2, 3, 5, 7, 11]);
    }

    #[test]
    fn prime_sum_test() {
        assert_eq!(prime_sum(0), 0);
        assert_eq!(prime_sum(-3), 0);
        assert_eq!(prime_sum(1), 2);
        assert_eq!(prime_sum(10), 129);
        assert_eq!(prime_sum(1000), 3682913);
    }

    #[test]
    fn random_prime_test() {
        assert_eq!(random_prime(2, 2), Some(2));
        assert_eq!(random_prime(24, 28), None);
        assert_eq!(random_prime(10, 5), None);
        assert_eq!(random_prime(-10, 1), None);
        assert_eq!(random_prime(i64::MIN, 2), Some(2));
        assert_eq!(random_prime(MAX_PRIME + 1, i64::MAX), None);
        assert_eq!(random_prime(MAX_PRIME, i64::MAX), Some(MAX_PRIME));
        assert_eq!(random_prime(90, 100), Some(97));

        for _ in 0..100 {
            let p = random_prime(1000, 2000).unwrap();
            assert!((1000..=2000).contains(&p) && is_prime(p));
        }

        // the probe wraps around to the start of the range
        for _ in 0..200 {
            assert_eq!(random_prime(23, 28), Some(23));
        }

        // a seeded source gives reproducible picks
        use rand::{rngs::StdRng, SeedableRng};
        let first = random_prime_with(&mut StdRng::seed_from_u64(42), 1, 1_000_000);
        let second = random_prime_with(&mut StdRng::seed_from_u64(42), 1, 1_000_000);
        assert_eq!(first, second);
        assert!(first.map_or(false, is_prime));
    }

    #[test]
    fn nth_palprime_test() {
        assert_eq!(nth_palprime(1), 2);
        assert_eq!(nth_palprime(5), 11);
        assert_eq!(nth_palprime(6), 101);
        assert_eq!(nth_palprime(20), 929);
        assert_eq!(nth_palprime(21), 10301);
    }

    #[test]
    fn nth_palprime_bruteforce_test() {
        // compare the block skipping against all palindromic primes below 10^7
        let palprimes: Vec<i64> = primes(10_000_000)
            .into_iter()
            .filter(|p| {
                let digits = p.to_string();
                digits.chars().rev().collect::<String>() == digits
            })
            .map(|p| p as i64)
            .collect();
        assert_eq!(palprimes.len(), 781);
        for (i, &p) in palprimes.iter().enumerate() {
            assert_eq!(nth_palprime(i as i32 + 1), p, "palprime #{}", i + 1);
        }
    }

    #[test]
    #[should_panic]
    fn nth_palprime_zero_test() {
        nth_palprime(0);
    }

    #[test]
    fn goldbach_pair_test() {
        assert_eq!(goldbach_pair(4), Some((2, 2)));
        assert_eq!(goldbach_pair(6), Some((3, 3)));
        assert_eq!(goldbach_pair(28), Some((5, 23)));
        assert_eq!(goldbach_pair(100), Some((3, 97)));
        assert_eq!(goldbach_pair(2), None);
        assert_eq!(goldbach_pair(27), None);
        assert_eq!(goldbach_pair(i64::MIN), None);

        for n in (4..5000).step_by(2) {
            let (p, q) = goldbach_pair(n).unwrap();
            assert!(p <= q && p + q == n && is_prime(p) && is_prime(q));
        }
        let (p, q) = goldbach_pair(i64::MAX - 1).unwrap();
        assert_eq!(p.checked_add(q), Some(i64::MAX - 1));
    }

    #[test]
    fn related_primes_test() {
        assert_eq!(related_primes(17, 6), [11, 23]);
        assert_eq!(related_primes(5, 2), [3, 7]);
        assert_eq!(related_primes(7, 4), [3, 11]);
        assert_eq!(related_primes(3, 2), [5]);
        assert_eq!(related_primes(23, 2), Vec::<i64>::new());
        assert_eq!(related_primes(13, 0), Vec::<i64>::new());
        assert_eq!(related_primes(MAX_PRIME, 24), Vec::<i64>::new());
        assert_eq!(related_primes(MAX_PRIME, 140), [9223372036854775643]);
    }

    #[test]
    fn balanced_prime_test() {
        // OEIS A006562
        let balanced = [5, 53, 157, 173, 211, 257, 263, 373, 563, 593, 607, 653, 733, 947, 977];
        let found: Vec<i64> = (0..1000).filter(|&n| is_balanced_prime(n)).collect();
        assert_eq!(found, balanced);
        assert!(!is_balanced_prime(2));
        assert!(!is_balanced_prime(MAX_PRIME));
    }
}
