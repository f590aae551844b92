//! Severity Weighting and Threshold Deviation

/// Priority weight for a severity label
///
/// The label set is open; anything outside the known labels weighs 0 and so
/// never influences group ranking.
pub fn severity_weight(label: &str) -> u32 {
    match label {
        "critical" => 10,
        "warning" => 5,
        "info" => 1,
        _ => 0,
    }
}

/// Signed percentage deviation of an observed value from its threshold
///
/// A zero threshold yields 0.0 rather than dividing by zero.
pub fn deviation_percent(value: i64, threshold: i64) -> f64 {
    if threshold == 0 {
        return 0.0;
    }
    ((value - threshold) as f64 / threshold as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_severity_weights() {
        assert_eq!(severity_weight("critical"), 10);
        assert_eq!(severity_weight("warning"), 5);
        assert_eq!(severity_weight("info"), 1);
    }

    #[test]
    fn test_unknown_severity_weighs_zero() {
        assert_eq!(severity_weight("notice"), 0);
        assert_eq!(severity_weight(""), 0);
        assert_eq!(severity_weight("CRITICAL"), 0);
    }

    #[test]
    fn test_deviation_above_threshold() {
        assert!((deviation_percent(150, 100) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deviation_below_threshold() {
        assert!((deviation_percent(40, 50) - (-20.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_threshold_is_defined() {
        assert_eq!(deviation_percent(150, 0), 0.0);
        assert_eq!(deviation_percent(0, 0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_deviation_matches_formula(value in -10_000i64..10_000, threshold in -10_000i64..10_000) {
            let got = deviation_percent(value, threshold);
            if threshold == 0 {
                prop_assert_eq!(got, 0.0);
            } else {
                let expected = (value - threshold) as f64 / threshold as f64 * 100.0;
                prop_assert!((got - expected).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_value_at_threshold_has_zero_deviation(threshold in -10_000i64..10_000) {
            prop_assert_eq!(deviation_percent(threshold, threshold), 0.0);
        }
    }
}
