use crate::depth::Depth;
use crate::error::{self, Result};

pub fn factorial_naive(n: u64) -> Result<u64> {
    factorial_naive_with(n, Depth::default())
}

/// `1` if `n <= 1`, else `n * factorial(n - 1)`; the product is pending while
/// the inner call runs.
pub fn factorial_naive_with(n: u64, depth: Depth) -> Result<u64> {
    factorial_naive_rec(n, n, depth)
}

// `argument` is the caller's `n`, reported on overflow by every variant.
fn factorial_naive_rec(n: u64, argument: u64, depth: Depth) -> Result<u64> {
    if n <= 1 {
        return Ok(1);
    }
    let inner = factorial_naive_rec(n - 1, argument, depth.descend()?)?;
    error::mul(n, inner, "factorial", argument)
}

pub fn factorial_accum(n: u64) -> Result<u64> {
    factorial_accum_from(n, 1, n)
}

// tail call: factorial_accum_from(n - 1, acc * n, argument)
fn factorial_accum_from(mut n: u64, mut acc: u64, argument: u64) -> Result<u64> {
    while n > 1 {
        acc = error::mul(acc, n, "factorial", argument)?;
        n -= 1;
    }
    Ok(acc)
}

pub fn factorial_loop(n: u64) -> Result<u64> {
    (1..=n).try_fold(1, |acc, k| error::mul(acc, k, "factorial", n))
}
