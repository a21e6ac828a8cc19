//! Growth chart time ranges.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// Time-range filter for the growth chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "3Y")]
    ThreeYears,
    #[serde(rename = "ALL")]
    All,
}

impl TimeRange {
    /// Lookback window in days; `None` means the full series.
    pub fn days(&self) -> Option<i64> {
        match self {
            TimeRange::OneMonth => Some(30),
            TimeRange::SixMonths => Some(180),
            TimeRange::OneYear => Some(365),
            TimeRange::ThreeYears => Some(365 * 3),
            TimeRange::All => None,
        }
    }

    /// Earliest date kept by this range, relative to `today`.
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.days().map(|days| today - Duration::days(days))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::OneMonth => "1M",
            TimeRange::SixMonths => "6M",
            TimeRange::OneYear => "1Y",
            TimeRange::ThreeYears => "3Y",
            TimeRange::All => "ALL",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "1M" => Ok(TimeRange::OneMonth),
            "6M" => Ok(TimeRange::SixMonths),
            "1Y" => Ok(TimeRange::OneYear),
            "3Y" => Ok(TimeRange::ThreeYears),
            "ALL" => Ok(TimeRange::All),
            other => Err(Error::Validation(format!(
                "Unknown time range token '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for token in ["1M", "6M", "1Y", "3Y", "ALL"] {
            let range: TimeRange = token.parse().unwrap();
            assert_eq!(range.to_string(), token);
        }
        assert!("2W".parse::<TimeRange>().is_err());
    }

    #[test]
    fn cutoff_math() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        assert_eq!(
            TimeRange::OneMonth.cutoff(today),
            Some(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        );
        assert_eq!(
            TimeRange::ThreeYears.cutoff(today),
            Some(today - Duration::days(1095))
        );
        assert_eq!(TimeRange::All.cutoff(today), None);
    }
}
