use std::fmt::{self, Display, Formatter};

/// Running weighted average of a single named scalar.
///
/// Keeps the last observed value next to the cumulative sum and weight,
/// so both the instantaneous and the mean value are available for display.
pub struct AverageTracker {
    name: String,
    val: f64,
    sum: f64,
    count: f64,
    avg: f64,
}

impl AverageTracker {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            val: 0.0,
            sum: 0.0,
            count: 0.0,
            avg: 0.0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last observed value, unweighted.
    #[must_use]
    pub fn val(&self) -> f64 {
        self.val
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Cumulative weight over all observations.
    #[must_use]
    pub fn count(&self) -> f64 {
        self.count
    }

    /// Current running average, `0.0` until the first weighted observation.
    #[must_use]
    pub fn item(&self) -> f64 {
        self.avg
    }

    /// Records an observation with weight 1.
    pub fn update(&mut self, value: f64) {
        self.update_weighted(value, 1.0);
    }

    /// Records an observation of `value` carrying weight `n`.
    ///
    /// While the cumulative weight stays at zero, the average keeps its
    /// previous value instead of dividing by zero.
    pub fn update_weighted(&mut self, value: f64, n: f64) {
        self.val = value;
        self.sum += value * n;
        self.count += n;
        if self.count > 0.0 {
            self.avg = self.sum / self.count;
        }
    }

    /// Clears the accumulated state, the name is retained.
    pub fn reset(&mut self) {
        self.val = 0.0;
        self.sum = 0.0;
        self.count = 0.0;
        self.avg = 0.0;
    }
}

impl Display for AverageTracker {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {:.4} ({:.4})", self.name, self.val, self.avg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_average_ok() {
        let mut tracker = AverageTracker::new("loss");
        tracker.update(2.0);
        assert!((tracker.item() - 2.0).abs() < f64::EPSILON);
        tracker.update(4.0);
        assert!((tracker.item() - 3.0).abs() < f64::EPSILON);
        assert!((tracker.val() - 4.0).abs() < f64::EPSILON);
        assert!((tracker.count() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn weighted_average_ok() {
        let mut tracker = AverageTracker::new("loss");
        tracker.update_weighted(2.0, 3.0);
        tracker.update_weighted(8.0, 1.0);
        assert!((tracker.item() - 3.5).abs() < f64::EPSILON);
        assert!((tracker.val() - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reset_ok() {
        let mut tracker = AverageTracker::new("loss");
        tracker.update_weighted(42.0, 7.0);
        tracker.reset();
        assert_eq!(tracker.val(), 0.0);
        assert_eq!(tracker.sum(), 0.0);
        assert_eq!(tracker.count(), 0.0);
        assert_eq!(tracker.item(), 0.0);
        assert_eq!(tracker.name(), "loss");
    }

    #[test]
    fn zero_weight_keeps_average() {
        let mut tracker = AverageTracker::new("loss");
        tracker.update_weighted(5.0, 0.0);
        assert_eq!(tracker.item(), 0.0);
        tracker.update_weighted(2.0, 4.0);
        assert!((tracker.item() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn display_ok() {
        let mut tracker = AverageTracker::new("loss");
        tracker.update(2.76544);
        tracker.update(1.23456);
        assert_eq!(tracker.to_string(), "loss 1.2346 (2.0000)");
    }
}
