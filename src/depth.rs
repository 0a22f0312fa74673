//! Explicit recursion budget for the naive (non-tail) forms.
//!
//! A real stack overflow aborts the process, so the naive forms count their own
//! frames and give up with [`RecursionError::DepthExceeded`] well before the
//! thread's stack runs out.

use crate::error::{RecursionError, Result};
use log::{debug, warn};

/// Frames allowed by default, the usual interpreter recursion limit.
pub const DEFAULT_DEPTH_LIMIT: usize = 1000;

/// Highest limit accepted. The deepest guarded recursion (a cold memoizer,
/// three frames per level) stays well inside the 2 MiB stack of a spawned
/// thread at this depth, let alone the main thread's.
pub const MAX_DEPTH_LIMIT: usize = 2000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Depth {
    current: usize,
    limit: usize,
}

impl Depth {
    /// A budget of `limit` nested frames, clamped to [`MAX_DEPTH_LIMIT`].
    pub fn new(limit: usize) -> Self {
        if limit > MAX_DEPTH_LIMIT {
            warn!(
                "depth limit {} lowered to {} to stay within the thread's stack",
                limit, MAX_DEPTH_LIMIT
            );
        }
        Depth {
            current: 0,
            limit: limit.min(MAX_DEPTH_LIMIT),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The depth of a frame nested one level below this one.
    pub fn descend(self) -> Result<Depth> {
        if self.current >= self.limit {
            debug!("recursion depth limit {} reached", self.limit);
            return Err(RecursionError::DepthExceeded { limit: self.limit });
        }
        Ok(Depth {
            current: self.current + 1,
            limit: self.limit,
        })
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth::new(DEFAULT_DEPTH_LIMIT)
    }
}
