pub mod cli;
pub mod demo;
pub mod depth;
pub mod error;
pub mod factorial;
pub mod fibonacci;
pub mod logging;
pub mod memoizer;
pub mod power;
pub mod sum;
pub mod timing;

pub use error::{RecursionError, Result};
pub use memoizer::{memoize, Memoizer, Recur};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth::Depth;

    #[test]
    fn naive_and_accumulator_forms_agree() {
        for n in 0..=20 {
            assert_eq!(factorial::factorial_naive(n), factorial::factorial_accum(n));
            assert_eq!(fibonacci::fib_naive(n), fibonacci::fib_accum(n));
            assert_eq!(fibonacci::fib_memoized(n), fibonacci::fib_accum(n));
            assert_eq!(sum::sum_naive(0, n), sum::sum_accum(0, n));
            assert_eq!(power::power_naive(3, n), power::power_accum(3, n));
        }
    }

    #[test]
    fn naive_forms_share_the_depth_policy() {
        let depth = Depth::new(50);
        let exhausted = Err(RecursionError::DepthExceeded { limit: 50 });
        assert_eq!(sum::sum_naive_with(0, 100, depth), exhausted);
        assert_eq!(factorial::factorial_naive_with(100, depth), exhausted);
        assert_eq!(power::power_naive_with(1, 100, depth), exhausted);
        assert_eq!(fibonacci::fib_naive_with(80, depth), exhausted);
    }
}
