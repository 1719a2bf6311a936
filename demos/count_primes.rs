use prime_engine::{Offline, PrimeCounter, PrimecountCli};

fn main() {
    // uses `primecount` from PATH if it is installed
    let counter = PrimeCounter::new(PrimecountCli::default().threads(4));
    let offline = PrimeCounter::new(Offline);

    for x in [1_234_567i64, 98_765_432_101, 1_000_000_000_000_123, 1_500_000_000_000_000_000] {
        let with_cli = counter.prime_count(x);
        let local = offline.prime_count(x);
        println!(
            "pi({}) = {} (exact: {}), without primecount {} (exact: {})",
            x, with_cli.count, with_cli.exact, local.count, local.exact
        );
    }
    println!("10000th prime: {:?}", counter.nth_prime(10_000));
}
