//!
//! Memory overhead of a strategy relative to the candidate.
//!

///
/// Memory overhead of a strategy relative to the candidate.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// The share of the strategy's bytes saved by the candidate, in percent.
    /// Negative if the candidate allocates more.
    Percent(f64),
    /// The strategy allocated nothing while the candidate did.
    /// Most likely a broken measurement, so no percentage is assigned.
    Anomalous,
}

impl Comparison {
    ///
    /// Compares the bytes allocated by a strategy with the candidate's.
    ///
    /// Takes `u128` so that totals over many SKPs fit.
    ///
    pub fn new(allocated_bytes: u128, candidate_bytes: u128) -> Self {
        match (allocated_bytes, candidate_bytes) {
            (0, 0) => Self::Percent(0.0),
            (0, _) => Self::Anomalous,
            (allocated, candidate) => {
                let allocated = allocated as f64;
                Self::Percent(100.0 * (allocated - candidate as f64) / allocated)
            }
        }
    }

    ///
    /// Returns `true` for [`Self::Anomalous`].
    ///
    pub fn is_anomalous(&self) -> bool {
        matches!(self, Self::Anomalous)
    }

    ///
    /// The percentage, `None` for anomalous measurements.
    ///
    pub fn percent(&self) -> Option<f64> {
        match self {
            Self::Percent(percent) => Some(*percent),
            Self::Anomalous => None,
        }
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Percent(percent) => write!(f, "{percent:.2}%"),
            Self::Anomalous => write!(f, "zero bytes while the candidate allocated memory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Comparison;

    #[test]
    fn percent_of_strategy_bytes() {
        assert_eq!(Comparison::new(1000, 500), Comparison::Percent(50.0));
        assert_eq!(Comparison::new(200, 300), Comparison::Percent(-50.0));
        assert_eq!(Comparison::new(7, 7), Comparison::Percent(0.0));
        assert_eq!(Comparison::new(4, 0), Comparison::Percent(100.0));
    }

    #[test]
    fn matches_formula() {
        for allocated in [1_u128, 3, 1000, 123_456_789] {
            for candidate in [0_u128, 1, 2, 999, 10_000_000] {
                let expected =
                    100.0 * (allocated as f64 - candidate as f64) / allocated as f64;
                assert_eq!(
                    Comparison::new(allocated, candidate).percent(),
                    Some(expected)
                );
            }
        }
    }

    #[test]
    fn both_zero() {
        assert_eq!(Comparison::new(0, 0), Comparison::Percent(0.0));
    }

    #[test]
    fn zero_strategy_bytes_is_anomalous() {
        let comparison = Comparison::new(0, 300);
        assert!(comparison.is_anomalous());
        assert_eq!(comparison.percent(), None);
    }

    #[test]
    fn serialization() {
        assert_eq!(
            serde_json::to_string(&Comparison::Percent(50.0)).expect("Always valid"),
            r#"{"percent":50.0}"#
        );
        assert_eq!(
            serde_json::to_string(&Comparison::Anomalous).expect("Always valid"),
            r#""anomalous""#
        );
    }
}
