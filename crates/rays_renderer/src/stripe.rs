//! Row striping across render workers.
//!
//! Worker `i` of `T` owns image rows `i, i + T, i + 2T, ...`. Every row has
//! exactly one owner, which is what lets workers write the frame buffer
//! without locks.

use crate::{RenderError, RenderResult};

/// Index of the worker that owns row `y`. `threads` must be at least 1.
#[inline]
pub fn worker_for_row(y: u32, threads: usize) -> usize {
    y as usize % threads
}

/// Rows owned by each of `threads` workers, in ascending order.
///
/// With more workers than rows the surplus workers get empty stripes.
pub fn stripe_rows(height: u32, threads: usize) -> RenderResult<Vec<Vec<u32>>> {
    if threads == 0 {
        return Err(RenderError::InvalidThreads);
    }

    let mut stripes = vec![Vec::new(); threads];
    for y in 0..height {
        stripes[worker_for_row(y, threads)].push(y);
    }
    Ok(stripes)
}
