//! Pure projection functions over an immutable snapshot.
//!
//! Every function returns a new collection; the snapshot shared across
//! repeated user interactions is never mutated.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use chrono::NaiveDate;
use fundlens_api_client::models::{GrowthPoint, Holding, RecoveryDays};

use super::{SortDirection, SortKey, TimeRange};

/// Simple gain on invested capital, in percent.
/// Zero when nothing is invested - never a division error.
pub fn derived_return_pct(holding: &Holding) -> Decimal {
    if holding.amount > Decimal::ZERO {
        (holding.current_value - holding.amount) / holding.amount * dec!(100)
    } else {
        Decimal::ZERO
    }
}

/// Numeric sort value for one holding under the given key.
///
/// `None` stands in for "not computed" and orders below every present value
/// (ascending puts absentees first, descending last). An unrecovered
/// drawdown has no day count and sorts with the absentees.
fn sort_value(holding: &Holding, key: SortKey) -> Option<Decimal> {
    let analytics = holding.analytics.as_ref();
    match key {
        SortKey::Description => None, // compared lexicographically, not numerically
        SortKey::Amount => Some(holding.amount),
        SortKey::CurrentValue => Some(holding.current_value),
        SortKey::Xirr => holding.xirr,
        SortKey::Score => holding.score,
        SortKey::Return => Some(derived_return_pct(holding)),
        SortKey::FundLife => analytics.and_then(|a| a.fund_life),
        SortKey::Cagr => analytics.and_then(|a| a.cagr),
        SortKey::Alpha => analytics.and_then(|a| a.alpha),
        SortKey::Beta => analytics.and_then(|a| a.beta),
        SortKey::InfoRatio => analytics.and_then(|a| a.info_ratio),
        SortKey::Sharpe => analytics.and_then(|a| a.sharpe),
        SortKey::Sortino => analytics.and_then(|a| a.sortino),
        SortKey::MaxDrawdown => analytics.and_then(|a| a.max_drawdown),
        SortKey::RecoveryDays => analytics.and_then(|a| match a.recovery_days {
            Some(RecoveryDays::Days(days)) => Some(Decimal::from(days)),
            Some(RecoveryDays::Unrecovered) | None => None,
        }),
        SortKey::UpsideCapture => analytics.and_then(|a| a.upside_capture),
        SortKey::DownsideCapture => analytics.and_then(|a| a.downside_capture),
        SortKey::Rolling3yAvg => analytics.and_then(|a| a.rolling_3y_avg),
        SortKey::Rolling3yMax => analytics.and_then(|a| a.rolling_3y_max),
        SortKey::Rolling3yMin => analytics.and_then(|a| a.rolling_3y_min),
        SortKey::RollingPos => analytics.and_then(|a| a.rolling_pos),
    }
}

/// Returns the holdings reordered by `key` and `direction`.
///
/// Copy-on-read: the input is untouched so the same snapshot can serve
/// repeated sort requests. No stability guarantee for equal keys.
pub fn sort_holdings(
    holdings: &[Holding],
    key: SortKey,
    direction: SortDirection,
) -> Vec<Holding> {
    let mut sorted = holdings.to_vec();
    sorted.sort_unstable_by(|a, b| {
        let ordering = match key {
            SortKey::Description => a.description.cmp(&b.description),
            // Option<Decimal> orders None first, which is exactly the
            // missing-sorts-lowest policy.
            _ => sort_value(a, key).cmp(&sort_value(b, key)),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// Growth series points on or after the range cutoff, relative to `today`.
/// [`TimeRange::All`] returns the series unchanged; empty input stays empty.
pub fn filter_by_time_range(
    series: &[GrowthPoint],
    range: TimeRange,
    today: NaiveDate,
) -> Vec<GrowthPoint> {
    match range.cutoff(today) {
        None => series.to_vec(),
        Some(cutoff) => series
            .iter()
            .filter(|point| point.date >= cutoff)
            .cloned()
            .collect(),
    }
}

/// Aggregate figures for a subset of holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    pub total_value: Decimal,
    pub total_invested: Decimal,
    pub overall_return_pct: Decimal,
    pub fund_count: usize,
}

/// Sums value and invested amount across the subset and derives the overall
/// return. An empty subset yields zeros, never NaN. The category drill-down
/// and the dashboard both go through here so their figures always agree.
pub fn derive_summary_metrics<'a, I>(holdings: I) -> SummaryMetrics
where
    I: IntoIterator<Item = &'a Holding>,
{
    let mut total_value = Decimal::ZERO;
    let mut total_invested = Decimal::ZERO;
    let mut fund_count = 0usize;

    for holding in holdings {
        total_value += holding.current_value;
        total_invested += holding.amount;
        fund_count += 1;
    }

    let overall_return_pct = if total_invested > Decimal::ZERO {
        (total_value - total_invested) / total_invested * dec!(100)
    } else {
        Decimal::ZERO
    };

    SummaryMetrics {
        total_value,
        total_invested,
        overall_return_pct,
        fund_count,
    }
}

/// Holdings tagged with exactly this asset class (case-sensitive match, per
/// the category route contract). Untagged holdings never appear.
pub fn holdings_in_class<'a>(holdings: &'a [Holding], asset_class: &str) -> Vec<&'a Holding> {
    holdings
        .iter()
        .filter(|h| h.asset_class.as_deref() == Some(asset_class))
        .collect()
}
