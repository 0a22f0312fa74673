//! Sum of the integer range `[a, b]`.

use crate::depth::Depth;
use crate::error::{self, Result};

/// `0` if `a > b`, else `a + sum(a + 1, b)`. One frame per element.
pub fn sum_naive(a: u64, b: u64) -> Result<u64> {
    sum_naive_with(a, b, Depth::default())
}

pub fn sum_naive_with(a: u64, b: u64, depth: Depth) -> Result<u64> {
    if a > b {
        return Ok(0);
    }
    let rest = match a.checked_add(1) {
        Some(next) => sum_naive_with(next, b, depth.descend()?)?,
        None => 0,
    };
    error::add(a, rest, "sum", b)
}

/// Tail-recursive sum, starting from an empty accumulator.
pub fn sum_accum(a: u64, b: u64) -> Result<u64> {
    sum_accum_from(a, b, 0)
}

// The tail call `sum_accum_from(a + 1, b, acc + a)` is written as rebinding of
// the parameters, so the stack stays flat whatever the length of the range.
fn sum_accum_from(mut a: u64, b: u64, mut acc: u64) -> Result<u64> {
    loop {
        if a > b {
            return Ok(acc);
        }
        acc = error::add(acc, a, "sum", b)?;
        a = match a.checked_add(1) {
            Some(next) => next,
            None => return Ok(acc),
        };
    }
}

pub fn sum_loop(a: u64, b: u64) -> Result<u64> {
    let mut total: u64 = 0;
    for x in a..=b {
        total = error::add(total, x, "sum", b)?;
    }
    Ok(total)
}
