//! Fibonacci numbers, `fib(0) = 0`, `fib(1) = 1`.

use crate::depth::Depth;
use crate::error::{self, RecursionError, Result};
use crate::memoizer::{Memoizer, Recur};
use cached::proc_macro::cached;

/// Largest `n` with `fib(n) <= u64::MAX`.
pub const FIB_MAX: u64 = 93;

/// Tree recursion: exponential number of calls, depth `n`.
pub fn fib_naive(n: u64) -> Result<u64> {
    fib_naive_with(n, Depth::default())
}

/// Inputs past [`FIB_MAX`] are refused before recursing; the tree would take
/// longer than anyone waits to reach the overflowing addition.
pub fn fib_naive_with(n: u64, depth: Depth) -> Result<u64> {
    if n > FIB_MAX {
        return Err(RecursionError::Overflow {
            operation: "fib",
            argument: n,
        });
    }
    fib_naive_rec(n, depth)
}

fn fib_naive_rec(n: u64, depth: Depth) -> Result<u64> {
    if n < 2 {
        return Ok(n);
    }
    let depth = depth.descend()?;
    let a = fib_naive_rec(n - 1, depth)?;
    let b = fib_naive_rec(n - 2, depth)?;
    error::add(a, b, "fib", n)
}

/// A memoizer whose computation calls back into itself through the cache.
/// At most [`Depth::default`] computations nest in one cold call.
pub fn fib_memoizer() -> Memoizer<
    u64,
    u64,
    RecursionError,
    impl Fn(&mut Recur<'_, u64, u64, RecursionError>, &u64) -> Result<u64>,
> {
    Memoizer::with_depth(
        |fib: &mut Recur<'_, u64, u64, RecursionError>, &n: &u64| {
            if n < 2 {
                return Ok(n);
            }
            let a = fib.call(n - 1)?;
            let b = fib.call(n - 2)?;
            error::add(a, b, "fib", n)
        },
        Depth::default(),
    )
}

pub fn fib_memoized(n: u64) -> Result<u64> {
    fib_stepwise(&mut fib_memoizer(), n)
}

// A cold call nests one computation per key down to the cached ones, past the
// memoizer's depth limit for large `n`, so the cache is filled in steps of 512
// before asking for `n`. Overflows are reported against `n`.
pub fn fib_stepwise<F>(fib: &mut Memoizer<u64, u64, RecursionError, F>, n: u64) -> Result<u64>
where
    F: Fn(&mut Recur<'_, u64, u64, RecursionError>, &u64) -> Result<u64>,
{
    let mut k = 0;
    while k < n {
        fib.get(k).map_err(|e| e.at_argument(n))?;
        k += 512;
    }
    fib.get(n).map_err(|e| e.at_argument(n))
}

/// Accumulator pair: `(a, b)` walks `(fib(k), fib(k + 1))` up to `k = n`.
pub fn fib_accum(n: u64) -> Result<u64> {
    fib_accum_from(n, 0, 1)
}

// tail call: fib_accum_from(n - 1, b, a + b)
fn fib_accum_from(mut count: u64, mut a: u64, mut b: u64) -> Result<u64> {
    let argument = count;
    while count > 0 {
        if count == 1 {
            return Ok(b);
        }
        let next = error::add(a, b, "fib", argument)?;
        a = b;
        b = next;
        count -= 1;
    }
    Ok(a)
}

/// The same recursion memoized by `#[cached]`; the cache is process-wide.
/// There is no handle to fill it stepwise, so inputs past `fib(93)` are refused
/// before recursing.
#[cached(result = true)]
pub fn fib_cached(n: u64) -> std::result::Result<u64, RecursionError> {
    if n > FIB_MAX {
        return Err(RecursionError::Overflow {
            operation: "fib",
            argument: n,
        });
    }
    if n < 2 {
        return Ok(n);
    }
    let a = fib_cached(n - 1)?;
    let b = fib_cached(n - 2)?;
    error::add(a, b, "fib", n)
}
