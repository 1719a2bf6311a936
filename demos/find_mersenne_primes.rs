use prime_engine::{is_prime, primes_iter, MERSENNE_PRIMES, PERFECT_NUMBERS};

/// Find all mersenne primes 2^p-1 that fit in i64, return a list of p
fn list_mersenne() -> Vec<u32> {
    primes_iter()
        .take_while(|&p| p < 63)
        .map(|p| p as u32)
        .filter(|&p| is_prime((1i64 << p) - 1))
        .collect()
}

fn main() {
    println!("Mersenne primes under 2^63:");
    let exponents = list_mersenne();
    for &p in &exponents {
        println!("2^{} - 1", p);
    }
    assert_eq!(exponents.len(), MERSENNE_PRIMES.len());

    // Euclid–Euler: 2^(p-1) * (2^p - 1) is perfect
    for (&m, &perfect) in MERSENNE_PRIMES.iter().zip(PERFECT_NUMBERS.iter()) {
        println!("{} -> {}", m, perfect);
    }
}
