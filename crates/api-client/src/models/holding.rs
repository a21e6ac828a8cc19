//! Per-fund holding and analytics models.
//!
//! Every analytics field is independently optional: `None` means the backend
//! did not compute the metric (e.g. the fund is too young for a rolling 3Y
//! window). Absence is an expected state, distinct from zero.

use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// One scheme/fund position inside a portfolio snapshot.
///
/// `amount` and `current_value` are non-negative monetary values in the
/// portfolio currency. `asset_class` partitions holdings into disjoint
/// categories when present; holdings the backend could not classify carry
/// `None` and are excluded from category views.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Holding {
    pub isin: Option<String>,
    /// Raw statement description; always present, used as the grouping key
    /// when the backend could not resolve an ISIN.
    pub description: String,
    /// Resolved scheme name; falls back to a cleaned description upstream.
    pub scheme_name: Option<String>,
    /// Total invested amount.
    pub amount: Decimal,
    pub current_value: Decimal,
    /// Money-weighted annualized return, as a fraction (0.12 = 12%).
    pub xirr: Option<Decimal>,
    pub days_invested: Option<i64>,
    /// Composite quant score (0-100), computed by the backend scorer.
    pub score: Option<Decimal>,
    pub asset_class: Option<String>,
    pub is_sip: Option<bool>,
    pub analytics: Option<FundAnalytics>,
}

impl Holding {
    /// Display name for tables: resolved scheme name when available,
    /// statement description otherwise.
    pub fn display_name(&self) -> &str {
        self.scheme_name.as_deref().unwrap_or(&self.description)
    }
}

/// Risk/return analytics block for a single fund.
///
/// Ratios (`cagr`, `alpha`, `max_drawdown`, the rolling stats) are fractions,
/// not percentages. Capture ratios are already on the 0-100ish scale the
/// backend emits.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct FundAnalytics {
    /// Fund age in years, from first to last NAV observation.
    pub fund_life: Option<Decimal>,
    pub cagr: Option<Decimal>,
    pub alpha: Option<Decimal>,
    pub beta: Option<Decimal>,
    pub info_ratio: Option<Decimal>,
    pub sharpe: Option<Decimal>,
    pub sortino: Option<Decimal>,
    pub max_drawdown: Option<Decimal>,
    /// Days taken to recover from the maximum drawdown, or the explicit
    /// "Unrecovered" sentinel when the fund never climbed back.
    pub recovery_days: Option<RecoveryDays>,
    pub upside_capture: Option<Decimal>,
    pub downside_capture: Option<Decimal>,
    pub rolling_3y_avg: Option<Decimal>,
    pub rolling_3y_max: Option<Decimal>,
    pub rolling_3y_min: Option<Decimal>,
    /// Share of rolling 3Y windows with a positive annualized return.
    pub rolling_pos: Option<Decimal>,
}

/// Drawdown recovery on the wire is either a day count or the literal string
/// `"Unrecovered"`. Both flavors are preserved rather than unified with the
/// missing-field case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryDays {
    Days(i64),
    Unrecovered,
}

const UNRECOVERED_SENTINEL: &str = "Unrecovered";

impl Serialize for RecoveryDays {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecoveryDays::Days(days) => serializer.serialize_i64(*days),
            RecoveryDays::Unrecovered => serializer.serialize_str(UNRECOVERED_SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for RecoveryDays {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Days(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Days(days) => Ok(RecoveryDays::Days(days)),
            Raw::Text(text) if text == UNRECOVERED_SENTINEL => Ok(RecoveryDays::Unrecovered),
            Raw::Text(other) => Err(de::Error::custom(format!(
                "unexpected recovery_days value '{}'",
                other
            ))),
        }
    }
}
