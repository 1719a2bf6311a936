use prime_engine::{next_prime, previous_prime, prime_factors, random_prime, MAX_PRIME};

fn main() {
    for (start, end) in [(1, 100), (1_000_000, 2_000_000), (1 << 40, 1 << 41), (1 << 62, MAX_PRIME)] {
        let p = random_prime(start, end);
        println!("random prime in [{}, {}]: {:?}", start, end, p);
    }
    println!("no prime in [24, 28]: {:?}", random_prime(24, 28));

    // a random 40-bit semiprime factors back into its primes
    if let (Some(p), Some(q)) = (random_prime(1 << 19, 1 << 20), random_prime(1 << 19, 1 << 20)) {
        println!("{} * {} = {} -> {:?}", p, q, p * q, prime_factors(p * q));
    }

    let p = random_prime(1 << 50, 1 << 51).unwrap_or(2);
    println!("neighbours of {}: {:?} < {} < {:?}", p, previous_prime(p), p, next_prime(p));
}
