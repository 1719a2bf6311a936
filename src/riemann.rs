//! Riemann's R function in fixed 100 significant digit decimal arithmetic.
//!
//! R(x) = Σ μ(k)/k · li(x^(1/k)) is evaluated for k = 1..=64, stopping once x^(1/k) < 2, with
//! li(x) = γ + ln(ln x) + Σ (ln x)^k / (k·k!) for k = 1..=120. Every intermediate value is rounded
//! to [PRECISION] significant digits, the logarithm and exponential included, so the series sum
//! does not lose its low digits to cancellation.

use std::str::FromStr;
use std::sync::OnceLock;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};

use crate::tables::MOEBIUS;

/// Significant decimal digits kept by every operation
pub const PRECISION: u64 = 100;

/// Largest k for which x^(1/k) enters the R series
pub const MAX_ROOT_INDEX: usize = 64;

/// Number of terms of the li power series
pub const LI_SERIES_TERMS: u32 = 120;

/// Euler–Mascheroni constant γ to 100 significant digits
const EULER_MASCHERONI: &str = "0.577215664901532860606512090082402431042159335939923598805767234884867726777664670936947063291746749";

#[inline]
fn round(x: BigDecimal) -> BigDecimal {
    x.with_prec(PRECISION)
}

/// Series terms below this magnitude no longer change the rounded sum
fn epsilon() -> &'static BigDecimal {
    static EPSILON: OnceLock<BigDecimal> = OnceLock::new();
    EPSILON.get_or_init(|| BigDecimal::new(BigInt::one(), PRECISION as i64 + 5))
}

fn euler_gamma() -> &'static BigDecimal {
    static GAMMA: OnceLock<BigDecimal> = OnceLock::new();
    GAMMA.get_or_init(|| BigDecimal::from_str(EULER_MASCHERONI).expect("γ is a valid decimal"))
}

fn two() -> BigDecimal {
    BigDecimal::from(2u32)
}

/// ln 2 = 2·atanh(1/3)
fn ln2() -> &'static BigDecimal {
    static LN2: OnceLock<BigDecimal> = OnceLock::new();
    LN2.get_or_init(|| {
        let third = round(&BigDecimal::one() / &BigDecimal::from(3u32));
        round(atanh(&third) * two())
    })
}

/// atanh(z) = z + z^3/3 + z^5/5 + .., for |z| well below 1
fn atanh(z: &BigDecimal) -> BigDecimal {
    let z2 = round(z * z);
    let mut power = z.clone();
    let mut sum = BigDecimal::zero();
    let mut k = 1u32;
    loop {
        let term = round(&power / &BigDecimal::from(k));
        if &term.abs() < epsilon() {
            break sum;
        }
        sum = round(sum + term);
        power = round(&power * &z2);
        k += 2;
    }
}

/// Natural logarithm of a positive number.
///
/// x = 2^n·m with m ∈ [1, 2), then ln x = n·ln 2 + 2·atanh((m-1)/(m+1)).
pub fn ln(x: &BigDecimal) -> BigDecimal {
    debug_assert!(x > &BigDecimal::zero(), "logarithm of a non-positive number");
    let one = BigDecimal::one();
    let two = two();

    let mut m = x.clone();
    let mut exponent = 0i64;
    while m >= two {
        m = round(&m / &two);
        exponent += 1;
    }
    while m < one {
        m = round(&m * &two);
        exponent -= 1;
    }

    let z = round(&(&m - &one) / &(&m + &one));
    let mantissa = round(atanh(&z) * two);
    round(mantissa + ln2() * &BigDecimal::from(exponent))
}

/// Exponential function.
///
/// y is split as n·ln 2 + r with r ∈ [0, ln 2), e^r is summed as a Taylor series and then
/// doubled n times.
pub fn exp(y: &BigDecimal) -> BigDecimal {
    if y < &BigDecimal::zero() {
        return round(&BigDecimal::one() / &exp(&y.abs()));
    }

    let doublings = round(y / ln2()).with_scale(0).to_u64().unwrap_or(0);
    let r = round(y - &(ln2() * &BigDecimal::from(doublings)));

    let mut sum = BigDecimal::one();
    let mut term = BigDecimal::one();
    let mut k = 1u32;
    loop {
        term = round(&(&term * &r) / &BigDecimal::from(k));
        if &term.abs() < epsilon() {
            break;
        }
        sum = round(&sum + &term);
        k += 1;
    }

    let two = two();
    for _ in 0..doublings {
        sum = round(&sum * &two);
    }
    sum
}

/// The k-th root of a positive number, computed as exp(ln(x) / k)
pub fn nth_root(x: &BigDecimal, k: u32) -> BigDecimal {
    if k == 1 {
        return x.clone();
    }
    exp(&round(ln(x) / BigDecimal::from(k)))
}

/// Logarithmic integral li(x), taken as 0 below 2
pub fn li(x: &BigDecimal) -> BigDecimal {
    if x < &two() {
        return BigDecimal::zero();
    }

    let ln_x = ln(x);
    let mut sum = round(euler_gamma() + &ln(&ln_x));
    // term = (ln x)^k / k!
    let mut term = BigDecimal::one();
    for k in 1..=LI_SERIES_TERMS {
        let k = BigDecimal::from(k);
        term = round(&(&term * &ln_x) / &k);
        sum = round(&sum + &(&term / &k));
    }
    sum
}

/// Riemann's R function, an approximation of the prime counting function π(x)
pub fn riemann_r(x: &BigDecimal) -> BigDecimal {
    let two = two();
    let mut sum = BigDecimal::zero();
    for k in 1..=MAX_ROOT_INDEX {
        // terms with μ(k) = 0 vanish; the roots keep shrinking so the cutoff below still holds
        let mu = MOEBIUS[k];
        if mu == 0 {
            continue;
        }
        let root = nth_root(x, k as u32);
        if root < two {
            break;
        }
        let coefficient = round(&BigDecimal::from(mu) / &BigDecimal::from(k as u32));
        sum = round(&sum + &(&coefficient * &li(&root)));
    }
    sum
}

/// ⌊R(x + 1)⌋, the analytic estimate of π(x) used when no exact count is available
pub fn estimate_prime_count(x: i64) -> i64 {
    let shifted = BigDecimal::from(x) + BigDecimal::one();
    // truncation is the floor for the positive values R takes here
    riemann_r(&shifted)
        .with_scale(0)
        .to_i64()
        .unwrap_or(0)
        .max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn assert_close(actual: &BigDecimal, expected: &str, digits: i64) {
        let tolerance = BigDecimal::new(BigInt::one(), digits);
        let error = (actual - &decimal(expected)).abs();
        assert!(error < tolerance, "{} differs from {}", actual, expected);
    }

    #[test]
    fn ln_test() {
        assert!(ln(&BigDecimal::one()).is_zero());
        assert_close(
            &ln(&BigDecimal::from(10u32)),
            "2.302585092994045684017991454684364207601101488628772976033327900967572609677352480235997205089598298341967784",
            95,
        );
        // arguments below 1 are scaled up
        let ln_tenth = ln(&decimal("0.1"));
        assert_close(&(-ln_tenth), "2.3025850929940456840179914546843642076011014886287729760333279009675726096773524802359972050895982983", 95);
    }

    #[test]
    fn exp_test() {
        assert_eq!(exp(&BigDecimal::zero()), BigDecimal::one());
        assert_close(
            &exp(&BigDecimal::one()),
            "2.7182818284590452353602874713526624977572470936999595749669676277240766303535475945713821785251664274274663919",
            95,
        );
        assert_close(&exp(&ln(&BigDecimal::from(1000u32))), "1000", 90);
        assert_close(&exp(&decimal("-1")), "0.36787944117144232159552377016146086744581113103176783450783680169746149574489980335714727434591964375", 95);
    }

    #[test]
    fn nth_root_test() {
        assert_close(
            &nth_root(&BigDecimal::from(1000003u32), 3),
            "100.00009999990000016666633333406666495555971110072224877153591005852667520459872896394384971929667424659391188",
            90,
        );
        assert_eq!(nth_root(&BigDecimal::from(7u32), 1), BigDecimal::from(7u32));
        assert!(nth_root(&BigDecimal::from(i64::MAX), 63) < two());
        assert!(nth_root(&BigDecimal::from(i64::MAX), 62) >= two());
    }

    #[test]
    fn li_test() {
        assert!(li(&BigDecimal::one()).is_zero());
        assert_close(
            &li(&BigDecimal::from(1_000_000u32)),
            "78627.549159462181919862910747947261161321874382421767074759317893941676243578021724534327028515462678444157159",
            60,
        );
    }

    #[test]
    fn riemann_r_test() {
        assert_eq!(estimate_prime_count(1_000_000), 78527);
        assert_eq!(estimate_prime_count(123_456_789_012_345_678), 3_221_138_040_581_269);
        assert_eq!(estimate_prime_count(1_500_000_000_000_000_000), 36_741_125_385_728_286);
        assert_eq!(estimate_prime_count(10_000_000_005_000_000), 279_238_341_496_694);

        // the estimate grows with x
        let mut last = 0;
        for x in [100i64, 10_000, 1_000_000, 100_000_000, 10_000_000_000] {
            let r = estimate_prime_count(x);
            assert!(r > last);
            last = r;
        }
    }
}
