//! Display-ready models for the dashboard view.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use fundlens_api_client::models::{GrowthPoint, Holding, PortfolioSnapshot};

use crate::constants::PLACEHOLDER;
use crate::display::{
    format_inr, format_ratio, fraction_pct_cell, ratio_cell, recovery_cell, xirr_cell, ScoreBand,
};

/// The four stat cards at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub fund_count: usize,
    /// Portfolio XIRR in percent points, when the backend computed one.
    pub estimated_xirr_pct: Option<Decimal>,
    pub total_investment: Decimal,
    pub current_valuation: Decimal,
}

impl DashboardSummary {
    pub fn from_snapshot(snapshot: &PortfolioSnapshot) -> Self {
        Self {
            fund_count: snapshot.holdings.len(),
            estimated_xirr_pct: snapshot.xirr.map(|x| x * dec!(100)),
            total_investment: snapshot.total_investment,
            current_valuation: snapshot.current_valuation,
        }
    }
}

/// One slice of the allocation donut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub asset_class: String,
    pub value: Decimal,
    pub percent_of_total: Decimal,
}

/// Portfolio XIRR against the benchmark index, in percent points.
/// Only built when the backend supplied a benchmark XIRR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    pub portfolio_xirr_pct: Decimal,
    pub benchmark_xirr_pct: Decimal,
    pub delta_pct: Decimal,
    pub beating_benchmark: bool,
}

/// Derived figures for one growth point, as shown in the chart tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPointMetrics {
    pub absolute_gain: Decimal,
    pub return_pct: Decimal,
}

impl GrowthPointMetrics {
    pub fn for_point(point: &GrowthPoint) -> Self {
        let absolute_gain = point.portfolio - point.invested;
        let return_pct = if point.invested > Decimal::ZERO {
            absolute_gain / point.invested * dec!(100)
        } else {
            Decimal::ZERO
        };
        Self {
            absolute_gain,
            return_pct,
        }
    }
}

/// One fully-formatted row of the holdings table. Every cell is a display
/// string; absence renders placeholders, never errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRow {
    pub scheme: String,
    pub is_sip: bool,
    pub invested: String,
    pub current_value: String,
    pub xirr: String,
    pub fund_life: String,
    pub score: String,
    pub score_band: ScoreBand,
    pub cagr: String,
    pub alpha: String,
    pub beta: String,
    pub info_ratio: String,
    pub sharpe: String,
    pub sortino: String,
    pub max_drawdown: String,
    pub recovery: String,
    pub upside_capture: String,
    pub downside_capture: String,
    pub rolling_3y_avg: String,
    pub rolling_3y_max: String,
    pub rolling_3y_min: String,
    pub rolling_pos: String,
}

impl HoldingRow {
    pub fn from_holding(holding: &Holding) -> Self {
        let analytics = holding.analytics.as_ref();
        Self {
            scheme: holding.description.clone(),
            is_sip: holding.is_sip.unwrap_or(false),
            invested: format_inr(holding.amount),
            current_value: format_inr(holding.current_value),
            xirr: xirr_cell(holding.xirr, holding.days_invested),
            fund_life: ratio_cell(analytics.and_then(|a| a.fund_life), 1),
            score: match holding.score {
                Some(score) => format_ratio(score, 1),
                None => PLACEHOLDER.to_string(),
            },
            score_band: ScoreBand::for_table(holding.score),
            cagr: fraction_pct_cell(analytics.and_then(|a| a.cagr), 2),
            alpha: fraction_pct_cell(analytics.and_then(|a| a.alpha), 2),
            beta: ratio_cell(analytics.and_then(|a| a.beta), 2),
            info_ratio: ratio_cell(analytics.and_then(|a| a.info_ratio), 2),
            sharpe: ratio_cell(analytics.and_then(|a| a.sharpe), 2),
            sortino: ratio_cell(analytics.and_then(|a| a.sortino), 2),
            max_drawdown: fraction_pct_cell(analytics.and_then(|a| a.max_drawdown), 2),
            recovery: recovery_cell(analytics),
            upside_capture: ratio_cell(analytics.and_then(|a| a.upside_capture), 0),
            downside_capture: ratio_cell(analytics.and_then(|a| a.downside_capture), 0),
            rolling_3y_avg: fraction_pct_cell(analytics.and_then(|a| a.rolling_3y_avg), 2),
            rolling_3y_max: fraction_pct_cell(analytics.and_then(|a| a.rolling_3y_max), 2),
            rolling_3y_min: fraction_pct_cell(analytics.and_then(|a| a.rolling_3y_min), 2),
            rolling_pos: fraction_pct_cell(analytics.and_then(|a| a.rolling_pos), 1),
        }
    }
}
