//! # Stream Filters
//!
//! Stateful, single-sample digital filters for streaming scalar signals
//! in Rust.
//!
//! Each filter consumes one `f64` measurement at a time and produces one
//! filtered output, keeping only the minimal state needed for O(1)
//! per-sample updates.
//!
//! ## Filters
//!
//! - [`MovingAverageFilter`]: fixed-window average over a ring buffer with
//!   a running sum
//! - [`RunningAverageFilter`]: online arithmetic mean of everything seen
//!   so far
//! - [`LowPassFilter`]: first-order exponential smoother
//! - [`SimpleKalmanFilter`]: scalar predict/update Kalman cycle with a
//!   fixed constant-level model
//!
//! The filters are independent, plainly owned value types: no locking, no
//! shared state, and `update` never allocates or performs I/O. The
//! [`csv_utils`] module holds the CSV series loader/writer and a
//! standard-deviation helper used by simulation harnesses around the
//! filters.
//!
//! ## Example
//!
//! ```rust
//! use stream_filters::MovingAverageFilter;
//!
//! let mut filter = MovingAverageFilter::new(10).expect("valid window");
//! let smoothed: Vec<f64> = [14.2, 14.6, 14.1, 14.5]
//!     .iter()
//!     .map(|&x| filter.update(x))
//!     .collect();
//! assert_eq!(smoothed[0], 14.2); // first output equals first input
//! ```

mod error;
mod kalman;
mod low_pass;
mod moving_average;
mod running_average;

pub mod csv_utils;

pub use error::{FilterError, Result};
pub use kalman::SimpleKalmanFilter;
pub use low_pass::LowPassFilter;
pub use moving_average::MovingAverageFilter;
pub use running_average::RunningAverageFilter;

/// Runs a fresh [`MovingAverageFilter`] over a slice and collects the
/// outputs.
///
/// # Arguments
///
/// * `data` - The input signal samples, in order
/// * `window_size` - Number of samples to average over (must be > 0)
///
/// # Example
///
/// ```rust
/// use stream_filters::moving_average;
///
/// let smoothed = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 4).unwrap();
/// assert_eq!(smoothed[0], 1.0);
/// assert_eq!(smoothed[4], 3.5);
/// ```
pub fn moving_average(data: &[f64], window_size: usize) -> Result<Vec<f64>> {
    let mut filter = MovingAverageFilter::new(window_size)?;
    Ok(data.iter().map(|&x| filter.update(x)).collect())
}

/// Runs a fresh [`LowPassFilter`] with the given coefficient over a slice
/// and collects the outputs.
///
/// # Arguments
///
/// * `data` - The input signal samples, in order
/// * `alpha` - Smoothing coefficient in `[0, 1]` (not validated)
///
/// # Example
///
/// ```rust
/// use stream_filters::low_pass;
///
/// let smoothed = low_pass(&[10.0, 20.0], 0.2);
/// assert_eq!(smoothed[0], 10.0);
/// assert!((smoothed[1] - 18.0).abs() < 1e-12);
/// ```
pub fn low_pass(data: &[f64], alpha: f64) -> Vec<f64> {
    let mut filter = LowPassFilter::new(alpha);
    data.iter().map(|&x| filter.update(x)).collect()
}
