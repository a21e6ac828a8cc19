//! The portfolio snapshot document.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Holding;

/// One point of the portfolio growth time series.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GrowthPoint {
    pub date: NaiveDate,
    /// Cumulative invested amount as of this date.
    pub invested: Decimal,
    /// Portfolio market value as of this date.
    pub portfolio: Decimal,
    /// Value of the same cash flows invested in the benchmark index.
    pub benchmark: Option<Decimal>,
}

/// The full pre-computed analytics document served by the backend.
///
/// Produced wholesale per upload or fetch, cached for the session and
/// replaced wholesale on the next fetch - never incrementally patched.
/// Sparse documents deserialize without error: collections default to empty
/// and every metric is optional or zero-defaulted.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PortfolioSnapshot {
    pub total_investment: Decimal,
    pub current_valuation: Decimal,
    /// Portfolio-level money-weighted return, as a fraction.
    pub xirr: Option<Decimal>,
    /// Benchmark (index) XIRR over the same cash flows, as a fraction.
    pub benchmark_xirr: Option<Decimal>,
    pub transaction_count: Option<u64>,
    /// Ordered by date ascending.
    pub growth_chart: Vec<GrowthPoint>,
    /// Asset class name -> aggregate current value.
    pub allocation: BTreeMap<String, Decimal>,
    /// Order-irrelevant; views sort on demand.
    pub holdings: Vec<Holding>,
}
