use rayon::prelude::*;
use thiserror::Error;

use pixresample_image::Image;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// Controls how the destination rows are processed.
///
/// Every row is owned by exactly one worker, so all strategies produce the same output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process the rows in parallel.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

impl std::fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionStrategy::ParallelRows => write!(f, "parallel-rows"),
            ExecutionStrategy::Serial => write!(f, "serial"),
            ExecutionStrategy::Fixed(n) => write!(f, "fixed({n})"),
        }
    }
}

/// Apply a function to each destination pixel, row by row, with the given strategy.
///
/// The closure receives the column, the row and the channels of the pixel to write.
///
/// # Errors
///
/// Returns an error if a local thread pool is requested with zero threads or fails to build.
pub fn par_iter_rows_resample<T, const C: usize>(
    dst: &mut Image<T, C>,
    strategy: ExecutionStrategy,
    f: impl Fn(usize, usize, &mut [T]) + Send + Sync,
) -> Result<(), ParallelError>
where
    T: Send,
{
    let row_stride = C * dst.cols();
    let dst_slice = dst.as_slice_mut();

    let row_op = |(y, dst_row): (usize, &mut [T])| {
        dst_row
            .chunks_exact_mut(C)
            .enumerate()
            .for_each(|(x, dst_pixel)| f(x, y, dst_pixel));
    };

    match strategy {
        ExecutionStrategy::Serial => {
            dst_slice
                .chunks_exact_mut(row_stride)
                .enumerate()
                .for_each(row_op);
        }
        ExecutionStrategy::ParallelRows => {
            dst_slice
                .par_chunks_exact_mut(row_stride)
                .enumerate()
                .for_each(row_op);
        }
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            log::trace!("running on a local pool of {} threads", pool.current_num_threads());

            pool.install(|| {
                dst_slice
                    .par_chunks_exact_mut(row_stride)
                    .enumerate()
                    .for_each(row_op);
            });
        }
    }

    Ok(())
}
