//! # Metric Formatting
//! Abbreviated, human-readable renditions of raw channel metrics
//! (subscribers, views) for stat tiles and comparison headers.
//!
//! Thresholds: millions get an "M" suffix, thousands a "K", everything
//! below is rendered as a plain integer. One decimal place in both
//! abbreviated forms ("1.2M", "45.0K").

use crate::error::InvalidArgument;

/// Format a raw metric count into its abbreviated display form.
///
/// Negative, NaN and infinite inputs are rejected: counts are defined as
/// non-negative finite numbers and the caller decides what to show instead.
pub fn format_count(n: f64) -> Result<String, InvalidArgument> {
    if !n.is_finite() || n < 0.0 {
        return Err(InvalidArgument::CountOutOfDomain(n));
    }
    Ok(if n >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.1}K", n / 1_000.0)
    } else {
        format!("{}", n.trunc() as u64)
    })
}

/// Infallible convenience for integer counts (the usual case).
pub fn format_count_u64(n: u64) -> String {
    format_count(n as f64).expect("u64 counts are always in domain")
}

/// Signed growth percentage as shown next to a channel ("+12.5%", "-2.4%").
pub fn format_growth(rate: f64) -> String {
    if rate > 0.0 {
        format!("+{rate}%")
    } else {
        format!("{rate}%")
    }
}

/// Direction of a metric change, used to pick the trend marker on stat tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Trend::Up
        } else if change < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_below_thousand() {
        assert_eq!(format_count(0.0).unwrap(), "0");
        assert_eq!(format_count(999.0).unwrap(), "999");
    }

    #[test]
    fn thousands_get_k_suffix() {
        assert_eq!(format_count(1000.0).unwrap(), "1.0K");
        assert_eq!(format_count(1500.0).unwrap(), "1.5K");
        assert_eq!(format_count(45_000.0).unwrap(), "45.0K");
    }

    #[test]
    fn millions_get_m_suffix() {
        assert_eq!(format_count(1_000_000.0).unwrap(), "1.0M");
        assert_eq!(format_count(2_500_000.0).unwrap(), "2.5M");
    }

    #[test]
    fn rejects_out_of_domain_input() {
        assert!(format_count(-1.0).is_err());
        assert!(format_count(f64::NAN).is_err());
        assert!(format_count(f64::INFINITY).is_err());
        assert!(format_count(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn u64_convenience_matches_float_path() {
        assert_eq!(format_count_u64(3_400_000), "3.4M");
        assert_eq!(format_count_u64(720_000), "720.0K");
        assert_eq!(format_count_u64(420), "420");
    }

    /// Numeric magnitude implied by the output never decreases with the input.
    #[test]
    fn monotonic_over_non_negative_inputs() {
        fn implied(s: &str) -> f64 {
            if let Some(m) = s.strip_suffix('M') {
                m.parse::<f64>().unwrap() * 1_000_000.0
            } else if let Some(k) = s.strip_suffix('K') {
                k.parse::<f64>().unwrap() * 1_000.0
            } else {
                s.parse::<f64>().unwrap()
            }
        }
        let samples = [
            0u64, 1, 9, 999, 1_000, 1_049, 1_500, 9_999, 45_000, 999_949, 1_000_000, 2_500_000,
            89_000_000,
        ];
        for w in samples.windows(2) {
            let (a, b) = (w[0], w[1]);
            assert!(
                implied(&format_count_u64(a)) <= implied(&format_count_u64(b)),
                "format must stay monotonic between {a} and {b}"
            );
        }
    }

    #[test]
    fn growth_keeps_its_sign() {
        assert_eq!(format_growth(12.5), "+12.5%");
        assert_eq!(format_growth(-2.4), "-2.4%");
        assert_eq!(format_growth(0.0), "0%");
    }

    #[test]
    fn trend_follows_change_sign() {
        assert_eq!(Trend::from_change(3.2), Trend::Up);
        assert_eq!(Trend::from_change(-0.1), Trend::Down);
        assert_eq!(Trend::from_change(0.0), Trend::Flat);
    }
}
