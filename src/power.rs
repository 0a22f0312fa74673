//! `x` raised to the `n`-th power, with `power(x, 0) == 1` for every `x`.

use crate::depth::Depth;
use crate::error::{self, Result};

pub fn power_naive(x: u64, n: u64) -> Result<u64> {
    power_naive_with(x, n, Depth::default())
}

pub fn power_naive_with(x: u64, n: u64, depth: Depth) -> Result<u64> {
    power_naive_rec(x, n, n, depth)
}

fn power_naive_rec(x: u64, n: u64, exponent: u64, depth: Depth) -> Result<u64> {
    if n == 0 {
        return Ok(1);
    }
    let inner = power_naive_rec(x, n - 1, exponent, depth.descend()?)?;
    error::mul(x, inner, "power", exponent)
}

pub fn power_accum(x: u64, n: u64) -> Result<u64> {
    power_accum_from(x, n, 1)
}

// tail call: power_accum_from(x, n - 1, acc * x)
fn power_accum_from(x: u64, mut n: u64, mut acc: u64) -> Result<u64> {
    let exponent = n;
    while n > 0 {
        acc = error::mul(acc, x, "power", exponent)?;
        n -= 1;
    }
    Ok(acc)
}

/// Square-and-multiply, O(log n) multiplications.
pub fn power_fast(x: u64, n: u64) -> Result<u64> {
    let mut base = x;
    let mut exp = n;
    let mut acc: u64 = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = error::mul(acc, base, "power", n)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = error::mul(base, base, "power", n)?;
        }
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecursionError;

    #[test]
    fn zero_exponent() {
        for x in [0, 1, 2, 17, u64::MAX] {
            assert_eq!(power_naive(x, 0), Ok(1));
            assert_eq!(power_accum(x, 0), Ok(1));
            assert_eq!(power_fast(x, 0), Ok(1));
        }
    }

    #[test]
    fn variants_agree() {
        for x in 0..8 {
            for n in 0..20 {
                let naive = power_naive(x, n);
                assert_eq!(naive, power_accum(x, n), "{x}^{n}");
                assert_eq!(naive, power_fast(x, n), "{x}^{n}");
            }
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(power_accum(2, 10), Ok(1024));
        assert_eq!(power_fast(3, 40), Ok(12_157_665_459_056_928_801));
        assert_eq!(power_fast(2, 63), Ok(1 << 63));
        assert!(power_fast(2, 64).is_err());
        assert!(power_accum(2, 64).is_err());
    }

    #[test]
    fn variants_report_the_same_overflow() {
        for (x, n) in [(2, 64), (2, 70), (10, 25), (u64::MAX, 2)] {
            let expected = Err(RecursionError::Overflow {
                operation: "power",
                argument: n,
            });
            assert_eq!(power_naive(x, n), expected, "{x}^{n}");
            assert_eq!(power_accum(x, n), expected, "{x}^{n}");
            assert_eq!(power_fast(x, n), expected, "{x}^{n}");
        }
    }

    #[test]
    fn trivial_bases_never_overflow() {
        assert_eq!(power_accum(1, 1_000_000), Ok(1));
        assert_eq!(power_fast(0, 1_000_000), Ok(0));
        assert_eq!(power_fast(1, u64::MAX), Ok(1));
    }
}
