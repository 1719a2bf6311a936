use prime_engine::{goldbach_pair, is_balanced_prime, related_primes, MAX_PRIME};

fn main() {
    println!("Goldbach pairs of even numbers from 4 to 60:");
    for n in (4..=60).step_by(2) {
        if let Some((p, q)) = goldbach_pair(n) {
            println!("{} = {} + {}", n, p, q);
        }
    }
    println!("{:?}", goldbach_pair(i64::MAX - 1));

    // twin, cousin and sexy neighbours
    for p in [17i64, 101, 1_000_000_007] {
        for d in [2, 4, 6] {
            println!("{} ± {}: {:?}", p, d, related_primes(p, d));
        }
        println!("{} is balanced: {}", p, is_balanced_prime(p));
    }
    println!("below the largest prime: {:?}", related_primes(MAX_PRIME, 140));
}
