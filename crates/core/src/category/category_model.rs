//! Display-ready models for the category drill-down.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fundlens_api_client::models::Holding;

use crate::constants::PLACEHOLDER;
use crate::display::{format_inr, format_ratio, format_signed_pct, ScoreBand};
use crate::projection::derived_return_pct;

/// Aggregate header of a category page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub asset_class: String,
    pub total_value: Decimal,
    pub total_invested: Decimal,
    pub overall_return_pct: Decimal,
    pub fund_count: usize,
}

/// One fund row of the category table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRow {
    pub scheme_name: String,
    pub isin: Option<String>,
    pub current_value: String,
    pub invested: String,
    pub return_pct: String,
    pub score: String,
    pub score_band: ScoreBand,
    pub fund_life: String,
}

impl CategoryRow {
    pub fn from_holding(holding: &Holding) -> Self {
        Self {
            scheme_name: holding
                .scheme_name
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
            isin: holding.isin.clone(),
            current_value: format_inr(holding.current_value),
            invested: format_inr(holding.amount),
            return_pct: format_signed_pct(derived_return_pct(holding), 2),
            score: match holding.score {
                Some(score) => format_ratio(score, 1),
                None => PLACEHOLDER.to_string(),
            },
            score_band: ScoreBand::for_category(holding.score),
            fund_life: match holding.analytics.as_ref().and_then(|a| a.fund_life) {
                Some(years) => format!("{} yrs", format_ratio(years, 1)),
                None => PLACEHOLDER.to_string(),
            },
        }
    }
}

/// The full category page: header plus rows, in snapshot order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub summary: CategorySummary,
    pub rows: Vec<CategoryRow>,
}
