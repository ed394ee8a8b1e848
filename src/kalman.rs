/// A scalar Kalman filter with a fixed constant-level model.
///
/// The model parameters are set at construction and never change:
/// state transition `a = 1`, measurement model `h = 1`, process noise
/// `q = 0`, measurement noise `r = 4`. The state starts at an estimate of
/// 14.0 with error covariance 6.0.
///
/// Every update runs the full predict / gain / correct cycle:
///
/// ```text
/// x_pred = a * x              p_pred = a * p * a + q
/// k      = p_pred * h / (h * p_pred * h + r)
/// x      = x_pred + k * (z - h * x_pred)
/// p      = p_pred - k * h * p_pred
/// ```
///
/// With `q = 0` the predicted covariance never grows between updates, so the
/// gain shrinks monotonically over a run and the estimate becomes
/// progressively more resistant to new measurements. That decay is a
/// property of this parameterization and is left intact.
///
/// # Example
///
/// ```rust
/// use stream_filters::SimpleKalmanFilter;
///
/// let mut filter = SimpleKalmanFilter::new();
/// // First gain is 6 / (6 + 4) = 0.6, pulling the 14.0 prior toward z
/// assert!((filter.update(10.0) - 11.6).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleKalmanFilter {
    /// State transition
    a: f64,
    /// Measurement model
    h: f64,
    /// Process noise covariance
    q: f64,
    /// Measurement noise covariance
    r: f64,
    /// State estimate
    x: f64,
    /// Error covariance
    p: f64,
}

const INITIAL_ESTIMATE: f64 = 14.0;
const INITIAL_COVARIANCE: f64 = 6.0;

impl SimpleKalmanFilter {
    /// Creates a filter with the fixed model parameters and initial state.
    pub fn new() -> Self {
        Self {
            a: 1.0,
            h: 1.0,
            q: 0.0,
            r: 4.0,
            x: INITIAL_ESTIMATE,
            p: INITIAL_COVARIANCE,
        }
    }

    /// Feeds one measurement and returns the updated state estimate.
    pub fn update(&mut self, z: f64) -> f64 {
        // I. Predict
        let xp = self.a * self.x;
        let pp = self.a * self.p * self.a + self.q;

        // II. Kalman gain
        let k = pp * self.h / (self.h * pp * self.h + self.r);

        // III. Update estimate
        self.x = xp + k * (z - self.h * xp);

        // IV. Update error covariance
        self.p = pp - k * self.h * pp;

        self.x
    }

    /// Resets the state estimate and error covariance to their initial
    /// values; the model parameters are unaffected.
    pub fn reset(&mut self) {
        self.x = INITIAL_ESTIMATE;
        self.p = INITIAL_COVARIANCE;
    }

    /// Returns the current state estimate.
    pub fn estimate(&self) -> f64 {
        self.x
    }

    /// Returns the current error covariance.
    pub fn covariance(&self) -> f64 {
        self.p
    }
}

impl Default for SimpleKalmanFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_first_updates_match_hand_computation() {
        let mut filter = SimpleKalmanFilter::new();

        // k = 6/10 = 0.6; x = 14 + 0.6 * (10 - 14) = 11.6; p = 6 - 0.6 * 6 = 2.4
        assert_abs_diff_eq!(filter.update(10.0), 11.6, epsilon = 1e-12);
        assert_abs_diff_eq!(filter.covariance(), 2.4, epsilon = 1e-12);

        // k = 2.4/6.4 = 0.375; x = 11.6 + 0.375 * (10 - 11.6) = 11.0
        assert_abs_diff_eq!(filter.update(10.0), 11.0, epsilon = 1e-12);
        assert_abs_diff_eq!(filter.covariance(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_converges_monotonically_to_constant_measurement() {
        let mut filter = SimpleKalmanFilter::new();
        let z = 10.0;

        let mut prev_err = (filter.estimate() - z).abs();
        for _ in 0..200 {
            let x = filter.update(z);
            let err = (x - z).abs();
            assert!(err < prev_err, "estimate moved away from the measurement");
            prev_err = err;
        }
        assert!(prev_err < 0.2);
    }

    #[test]
    fn test_gain_strictly_decreases() {
        let mut filter = SimpleKalmanFilter::new();
        let r = 4.0;

        let mut prev_gain = f64::INFINITY;
        for _ in 0..100 {
            // With a = 1 and q = 0 the predicted covariance equals p, so the
            // gain for the upcoming update is p / (p + r).
            let gain = filter.covariance() / (filter.covariance() + r);
            assert!(gain < prev_gain);
            assert!(gain > 0.0);
            prev_gain = gain;

            filter.update(10.0);
        }
    }

    #[test]
    fn test_update_step_magnitude_decreases() {
        let mut filter = SimpleKalmanFilter::new();
        let z = 10.0;

        let mut prev_step = f64::INFINITY;
        for _ in 0..100 {
            let before = filter.estimate();
            let after = filter.update(z);
            let step = (after - before).abs();
            assert!(step < prev_step);
            prev_step = step;
        }
    }

    #[test]
    fn test_covariance_stays_nonnegative() {
        let mut filter = SimpleKalmanFilter::new();
        for i in 0..1000 {
            filter.update(if i % 2 == 0 { 100.0 } else { -100.0 });
            assert!(filter.covariance() >= 0.0);
        }
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut filter = SimpleKalmanFilter::new();
        for _ in 0..10 {
            filter.update(3.0);
        }

        filter.reset();
        assert_eq!(filter.estimate(), 14.0);
        assert_eq!(filter.covariance(), 6.0);
        assert_abs_diff_eq!(filter.update(10.0), 11.6, epsilon = 1e-12);
    }
}
