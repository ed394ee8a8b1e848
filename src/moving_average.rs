use crate::error::{FilterError, Result};

/// A fixed-window moving average filter for streaming samples.
///
/// Maintains a ring buffer of the last `window_size` samples together with
/// their running sum, so each update costs O(1) regardless of window size:
/// no buffer shifting, no re-summation.
///
/// The very first update after construction (or after [`reset`]) fills the
/// entire window with the incoming sample, so the first output equals the
/// first input and the filter has no cold-start transient.
///
/// # Example
///
/// ```rust
/// use stream_filters::MovingAverageFilter;
///
/// let mut filter = MovingAverageFilter::new(4).expect("valid window");
/// assert_eq!(filter.update(1.0), 1.0); // window primed with 1.0
/// filter.update(2.0);
/// filter.update(3.0);
/// filter.update(4.0);
/// assert_eq!(filter.update(5.0), 3.5); // (2 + 3 + 4 + 5) / 4
/// ```
///
/// [`reset`]: MovingAverageFilter::reset
#[derive(Debug, Clone)]
pub struct MovingAverageFilter {
    buf: Vec<f64>,
    /// Ring index of the slot to be replaced next.
    idx: usize,
    /// Running sum of the buffer contents.
    sum: f64,
    initialized: bool,
}

impl MovingAverageFilter {
    /// Creates a filter averaging over the last `window_size` samples.
    ///
    /// Returns [`FilterError::InvalidWindowSize`] if `window_size` is 0.
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(FilterError::InvalidWindowSize(window_size));
        }

        Ok(Self {
            buf: vec![0.0; window_size],
            idx: 0,
            sum: 0.0,
            initialized: false,
        })
    }

    /// Feeds one sample and returns the current moving average.
    pub fn update(&mut self, x: f64) -> f64 {
        if !self.initialized {
            // First run: prime the whole window with x so the output starts
            // at x instead of ramping up from zero.
            self.buf.fill(x);
            self.sum = self.buf.len() as f64 * x;
            self.idx = 0;
            self.initialized = true;
            return x;
        }

        // Replace the oldest sample with x, update running sum
        let old = self.buf[self.idx];
        self.sum += x - old;
        self.buf[self.idx] = x;
        self.idx = (self.idx + 1) % self.buf.len();

        self.sum / self.buf.len() as f64
    }

    /// Resets to the first-run state; the next update primes the window anew.
    ///
    /// The buffer stays allocated at the current window size.
    pub fn reset(&mut self) {
        self.sum = 0.0;
        self.idx = 0;
        self.initialized = false;
    }

    /// Changes the window size, discarding all history.
    ///
    /// The next update behaves like the first one ever. Returns
    /// [`FilterError::InvalidWindowSize`] for a zero window, in which case
    /// the filter keeps its previous window and state untouched.
    pub fn set_window_size(&mut self, window_size: usize) -> Result<()> {
        if window_size == 0 {
            return Err(FilterError::InvalidWindowSize(window_size));
        }

        self.buf = vec![0.0; window_size];
        self.idx = 0;
        self.sum = 0.0;
        self.initialized = false;
        Ok(())
    }

    /// Returns the window size.
    pub fn window_size(&self) -> usize {
        self.buf.len()
    }

    /// Returns the current average, or 0.0 if no sample has been fed yet.
    pub fn average(&self) -> f64 {
        if self.initialized {
            self.sum / self.buf.len() as f64
        } else {
            0.0
        }
    }
}

impl Default for MovingAverageFilter {
    /// A filter with a 100-sample window.
    fn default() -> Self {
        Self {
            buf: vec![0.0; 100],
            idx: 0,
            sum: 0.0,
            initialized: false,
        }
    }
}
