use prime_engine::{nth_palprime, prime_factors};

fn main() {
    println!("The first 30 palindromic primes:");
    let palprimes: Vec<i64> = (1..=30).map(nth_palprime).collect();
    println!("{:?}", palprimes);

    // every palindrome of even length is a multiple of 11
    for p in [1001i64, 123321, 98766789] {
        println!("{} = {:?}", p, prime_factors(p));
    }

    for n in [100, 1000, 5000] {
        println!("palindromic prime #{}: {}", n, nth_palprime(n));
    }
}
