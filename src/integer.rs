//! Exact square roots on 64-bit integers

use crate::traits::ExactRoots;
use num_integer::Roots;

// QUAD_RESIDUAL[N] has a bit i set iff i is a quadratic residue mod N.
const QUAD_RESIDUAL64: u64 = 0x0202021202030213;
const QUAD_RESIDUAL63: u64 = 0x0402483012450293;
const QUAD_RESIDUAL65: u64 = 0x218a019866014613;
const QUAD_RESIDUAL11: u64 = 0x23b;

impl ExactRoots for u64 {
    fn sqrt_exact(&self) -> Option<Self> {
        // eliminate most non-squares by checking legendre symbols.
        // See H. Cohen's "Course in Computational Algebraic Number Theory",
        // algorithm 1.7.3, page 40.
        if (QUAD_RESIDUAL64 >> (self & 63)) & 1 == 0 {
            return None;
        }
        if (QUAD_RESIDUAL63 >> (self % 63)) & 1 == 0 {
            return None;
        }
        if (QUAD_RESIDUAL65 >> ((self % 65) & 63)) & 1 == 0 {
            // Both 0 and 64 are squares mod 65
            return None;
        }
        if (QUAD_RESIDUAL11 >> (self % 11)) & 1 == 0 {
            return None;
        }

        let root = Roots::sqrt(self);
        if root * root == *self {
            Some(root)
        } else {
            None
        }
    }
}
