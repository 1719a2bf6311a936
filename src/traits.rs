use std::time::Duration;

use num_integer::Roots;

use crate::oracle::OracleError;

/// Extension on [num_integer::Roots] to detect perfect squares
pub trait ExactRoots: Roots + Clone {
    /// Return the integer square root if the integer is a perfect square
    fn sqrt_exact(&self) -> Option<Self>;

    fn is_square(&self) -> bool {
        self.sqrt_exact().is_some()
    }
}

/// An exact prime counting backend that lives outside the process.
///
/// Implementations must give up once `timeout` elapses. Every failure is reported as an
/// [OracleError] and callers treat all of them alike: the exact value is unavailable.
pub trait ExactCountOracle {
    /// Return π(x), the number of primes not exceeding `x`
    fn prime_pi(&self, x: i64, timeout: Duration) -> Result<i64, OracleError>;

    /// Return the `n`-th prime, counting 2 as the first
    fn nth_prime(&self, n: i64, timeout: Duration) -> Result<i64, OracleError>;
}

impl<O: ExactCountOracle + ?Sized> ExactCountOracle for &O {
    fn prime_pi(&self, x: i64, timeout: Duration) -> Result<i64, OracleError> {
        (**self).prime_pi(x, timeout)
    }

    fn nth_prime(&self, n: i64, timeout: Duration) -> Result<i64, OracleError> {
        (**self).nth_prime(n, timeout)
    }
}
