use serde::{Deserialize, Serialize};

pub const WEIGHT_MIN_KG: f64 = 30.0;
pub const WEIGHT_MAX_KG: f64 = 200.0;
pub const STRESS_MIN: i16 = 1;
pub const STRESS_MAX: i16 = 10;

/// One validated reading of the two user inputs. Values only come out of
/// [`parse_metrics`], so downstream rules can assume the ranges hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserMetrics {
    pub weight: f64,
    pub stress_level: i16,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MetricsError {
    #[error("values must be numeric, weight 30-200 kg, stress 1-10")]
    InvalidInput,
}

/// Parse the raw form values and check them against the fixed ranges.
/// The error does not say which field failed; the boundary shows one
/// fixed warning either way.
pub fn parse_metrics(weight_raw: &str, stress_raw: &str) -> Result<UserMetrics, MetricsError> {
    let weight: f64 = weight_raw
        .trim()
        .parse()
        .map_err(|_| MetricsError::InvalidInput)?;
    let stress_level: i16 = stress_raw
        .trim()
        .parse()
        .map_err(|_| MetricsError::InvalidInput)?;

    // NaN fails both range checks, so "NaN" never slips through the parse.
    if !(WEIGHT_MIN_KG..=WEIGHT_MAX_KG).contains(&weight) {
        return Err(MetricsError::InvalidInput);
    }
    if !(STRESS_MIN..=STRESS_MAX).contains(&stress_level) {
        return Err(MetricsError::InvalidInput);
    }

    Ok(UserMetrics {
        weight,
        stress_level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_values_inside_ranges() {
        let metrics = parse_metrics("82.5", "7").unwrap();
        assert_eq!(metrics.weight, 82.5);
        assert_eq!(metrics.stress_level, 7);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(parse_metrics("30", "1").is_ok());
        assert!(parse_metrics("200", "10").is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert_eq!(parse_metrics("29", "5"), Err(MetricsError::InvalidInput));
        assert_eq!(parse_metrics("201", "5"), Err(MetricsError::InvalidInput));
        assert_eq!(parse_metrics("80", "0"), Err(MetricsError::InvalidInput));
        assert_eq!(parse_metrics("80", "11"), Err(MetricsError::InvalidInput));
    }

    #[test]
    fn test_rejects_non_numeric_values() {
        assert_eq!(parse_metrics("abc", "5"), Err(MetricsError::InvalidInput));
        assert_eq!(parse_metrics("80", "high"), Err(MetricsError::InvalidInput));
        assert_eq!(parse_metrics("", "5"), Err(MetricsError::InvalidInput));
        assert_eq!(parse_metrics("NaN", "5"), Err(MetricsError::InvalidInput));
        assert_eq!(parse_metrics("inf", "5"), Err(MetricsError::InvalidInput));
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let metrics = parse_metrics(" 95 ", " 9 ").unwrap();
        assert_eq!(metrics.weight, 95.0);
        assert_eq!(metrics.stress_level, 9);
    }
}
