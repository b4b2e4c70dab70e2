/// Share of the upper bound used when a vacancy only advertises a ceiling.
const UPPER_ONLY_FACTOR: f64 = 0.8;
/// Multiplier applied when a vacancy only advertises a floor.
const LOWER_ONLY_FACTOR: f64 = 1.2;

/// Salary fork as advertised by a board, with "not specified" already mapped
/// to `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalaryRange {
    pub from: Option<f64>,
    pub to: Option<f64>,
}

impl SalaryRange {
    pub fn new(from: Option<f64>, to: Option<f64>) -> Self {
        Self { from, to }
    }

    /// Builds a range from raw board values where zero means "not specified".
    ///
    /// Negative bounds are dropped as well, so `(-5, 100)` estimates from the
    /// upper bound alone rather than averaging the pair.
    pub fn from_raw(from: Option<f64>, to: Option<f64>) -> Self {
        Self {
            from: from.filter(|value| *value > 0.0),
            to: to.filter(|value| *value > 0.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn estimate(&self) -> Option<f64> {
        predict_salary(self.from, self.to)
    }
}

/// Collapses a salary fork into a single expected value.
///
/// Returns `None` when neither bound is known.
pub fn predict_salary(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    match (from, to) {
        (None, None) => None,
        (None, Some(to)) => Some(UPPER_ONLY_FACTOR * to),
        (Some(from), None) => Some(LOWER_ONLY_FACTOR * from),
        (Some(from), Some(to)) => Some(0.5 * (from + to)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_bounds_yield_midpoint() {
        for (from, to) in [(100_000.0, 200_000.0), (1.0, 3.0), (55_500.0, 55_500.0)] {
            assert_eq!(predict_salary(Some(from), Some(to)), Some((from + to) / 2.0));
        }
    }

    #[test]
    fn one_sided_ranges_are_scaled() {
        assert_eq!(predict_salary(None, Some(1000.0)), Some(800.0));
        assert_eq!(predict_salary(Some(1000.0), None), Some(1200.0));
    }

    #[test]
    fn empty_range_has_no_estimate() {
        assert_eq!(predict_salary(None, None), None);
        assert!(SalaryRange::default().estimate().is_none());
    }

    #[test]
    fn raw_zero_bounds_are_treated_as_missing() {
        let range = SalaryRange::from_raw(Some(0.0), Some(50_000.0));
        assert_eq!(range, SalaryRange::new(None, Some(50_000.0)));
        assert_eq!(range.estimate(), Some(40_000.0));
        assert!(SalaryRange::from_raw(Some(0.0), Some(0.0)).is_empty());
    }

    #[test]
    fn negative_bounds_are_dropped() {
        let range = SalaryRange::from_raw(Some(-5.0), Some(100.0));
        assert_eq!(range, SalaryRange::new(None, Some(100.0)));
        assert_eq!(range.estimate(), Some(80.0));
    }
}
