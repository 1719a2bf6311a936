//! Prime counting π(x) and nth prime with a chain of strategies.
//!
//! A count is exact when it comes from the anchor table, from the external oracle, or from an
//! anchor corrected by scanning at most [CountConfig::search_radius] integers. Everything else
//! falls back to the Riemann R estimate.

use std::time::Duration;

use crate::oracle::PrimecountCli;
use crate::primality::is_prime;
use crate::riemann::estimate_prime_count;
use crate::tables::ANCHORS;
use crate::traits::ExactCountOracle;

/// A prime count together with whether it is proven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountResult {
    pub count: i64,
    /// false if `count` is an analytic estimate
    pub exact: bool,
}

impl CountResult {
    #[inline]
    pub fn exact(count: i64) -> Self {
        Self { count, exact: true }
    }

    #[inline]
    pub fn estimate(count: i64) -> Self {
        Self {
            count,
            exact: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CountConfig {
    /// time allowed for one call into the external oracle
    pub oracle_timeout: Duration,

    /// largest x whose count is requested from the oracle
    pub exact_count_limit: i64,

    /// largest n whose nth prime is requested from the oracle
    pub nth_prime_limit: i64,

    /// maximum distance from an anchor that is corrected by scanning
    pub search_radius: i64,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            oracle_timeout: Duration::from_secs(10),
            exact_count_limit: 1_000_000_000_000_000,
            nth_prime_limit: 30_000_000_000_000,
            search_radius: 1_000_000,
        }
    }
}

/// Prime counter that asks an [ExactCountOracle] before counting locally.
///
/// Oracle failures never reach the caller, they only move on to the next strategy.
#[derive(Debug, Clone)]
pub struct PrimeCounter<O = PrimecountCli> {
    oracle: O,
    config: CountConfig,
}

impl Default for PrimeCounter {
    fn default() -> Self {
        Self::new(PrimecountCli::default())
    }
}

impl<O: ExactCountOracle> PrimeCounter<O> {
    pub fn new(oracle: O) -> Self {
        Self::with_config(oracle, CountConfig::default())
    }

    pub fn with_config(oracle: O, config: CountConfig) -> Self {
        Self { oracle, config }
    }

    pub fn config(&self) -> &CountConfig {
        &self.config
    }

    /// Return π(x), the number of primes not exceeding `x`
    pub fn prime_count(&self, x: i64) -> CountResult {
        if x < 2 {
            return CountResult::exact(0);
        }
        if let Ok(i) = ANCHORS.binary_search_by_key(&x, |a| a.0) {
            tracing::trace!(x, "prime count from anchor table");
            return CountResult::exact(ANCHORS[i].1);
        }

        if x <= self.config.exact_count_limit {
            match self.oracle.prime_pi(x, self.config.oracle_timeout) {
                Ok(count) => return CountResult::exact(count),
                Err(err) => tracing::debug!(x, error = %err, "exact prime count unavailable"),
            }
        }

        if let Some(count) = self.count_from_nearest_anchor(x) {
            tracing::trace!(x, "prime count corrected from nearest anchor");
            return CountResult::exact(count);
        }

        tracing::trace!(x, "prime count estimated by Riemann R");
        CountResult::estimate(estimate_prime_count(x))
    }

    /// Return the `n`-th prime, counting 2 as the first.
    ///
    /// Only the oracle answers this, `None` means it was out of range or unavailable.
    pub fn nth_prime(&self, n: i64) -> Option<i64> {
        if n < 1 || n > self.config.nth_prime_limit {
            return None;
        }
        match self.oracle.nth_prime(n, self.config.oracle_timeout) {
            Ok(p) => Some(p),
            Err(err) => {
                tracing::debug!(n, error = %err, "nth prime unavailable");
                None
            }
        }
    }

    /// Count exactly by scanning from the closest anchor, if it lies within the search radius
    fn count_from_nearest_anchor(&self, x: i64) -> Option<i64> {
        let (anchor, anchor_count) = nearest_anchor(x);
        if x.abs_diff(anchor) > self.config.search_radius.unsigned_abs() {
            return None;
        }

        let count = if x > anchor {
            anchor_count + count_primes(anchor + 1, x)
        } else {
            anchor_count - count_primes(x + 1, anchor)
        };
        Some(count)
    }
}

/// The anchor closest to `x`; on a tie the larger one
fn nearest_anchor(x: i64) -> (i64, i64) {
    let position = match ANCHORS.binary_search_by_key(&x, |a| a.0) {
        Ok(i) => return ANCHORS[i],
        Err(i) => i,
    };
    if position == 0 {
        return ANCHORS[0];
    }
    if position == ANCHORS.len() {
        return ANCHORS[ANCHORS.len() - 1];
    }

    let (low, high) = (ANCHORS[position - 1], ANCHORS[position]);
    if x - low.0 < high.0 - x {
        low
    } else {
        high
    }
}

/// Number of primes in `[start, end]`
fn count_primes(start: i64, end: i64) -> i64 {
    (start..=end).filter(|&n| is_prime(n)).count() as i64
}
