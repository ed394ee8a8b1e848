/// An online arithmetic mean over all samples seen since the last reset.
///
/// Instead of storing samples, the filter folds each new one into the
/// previous average with the weight `(k - 1) / k`, where `k` is the 1-based
/// index of the incoming sample:
///
/// ```text
/// avg_k = (k - 1) / k * avg_{k-1} + 1 / k * x_k
/// ```
///
/// For k = 1 the weight is 0, so the first output equals the first input.
/// State is two words; each update is O(1).
///
/// # Example
///
/// ```rust
/// use stream_filters::RunningAverageFilter;
///
/// let mut filter = RunningAverageFilter::new();
/// for x in [10.0, 12.0, 11.0, 13.0, 9.0] {
///     filter.update(x);
/// }
/// assert!((filter.average() - 11.0).abs() < 1e-12);
/// assert_eq!(filter.count(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct RunningAverageFilter {
    prev_avg: f64,
    /// 1-based index of the next sample; saturates instead of wrapping.
    k: u64,
}

impl Default for RunningAverageFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningAverageFilter {
    /// Creates a filter with no samples incorporated.
    pub fn new() -> Self {
        Self {
            prev_avg: 0.0,
            k: 1,
        }
    }

    /// Feeds one sample and returns the updated average.
    pub fn update(&mut self, x: f64) -> f64 {
        let alpha = (self.k - 1) as f64 / self.k as f64;

        let avg = alpha * self.prev_avg + (1.0 - alpha) * x;
        self.prev_avg = avg;
        self.k = self.k.saturating_add(1);

        avg
    }

    /// Resets to the initial state: average 0, no samples incorporated.
    pub fn reset(&mut self) {
        self.prev_avg = 0.0;
        self.k = 1;
    }

    /// Returns the current average, or 0.0 if no sample has been fed yet.
    pub fn average(&self) -> f64 {
        self.prev_avg
    }

    /// Returns the number of samples incorporated so far.
    pub fn count(&self) -> u64 {
        self.k - 1
    }
}
