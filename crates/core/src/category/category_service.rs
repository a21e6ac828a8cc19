//! Service for the per-asset-class drill-down.

use log::debug;

use fundlens_api_client::models::PortfolioSnapshot;

use crate::projection::{derive_summary_metrics, holdings_in_class};

use super::{CategoryRow, CategorySummary, CategoryView};

/// Trait for the category view service.
pub trait CategoryServiceTrait: Send + Sync {
    /// Builds the drill-down page for one asset class. The class name comes
    /// straight from the route parameter and is matched case-sensitively;
    /// an unknown class yields an empty view, not an error.
    fn category_view(&self, snapshot: &PortfolioSnapshot, asset_class: &str) -> CategoryView;
}

pub struct CategoryService;

impl CategoryService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CategoryService {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryServiceTrait for CategoryService {
    fn category_view(&self, snapshot: &PortfolioSnapshot, asset_class: &str) -> CategoryView {
        let subset = holdings_in_class(&snapshot.holdings, asset_class);
        debug!("{} holdings in class {}", subset.len(), asset_class);

        // Same derivation the dashboard uses, so the figures always agree.
        let metrics = derive_summary_metrics(subset.iter().copied());
        let rows = subset.iter().map(|h| CategoryRow::from_holding(h)).collect();

        CategoryView {
            summary: CategorySummary {
                asset_class: asset_class.to_string(),
                total_value: metrics.total_value,
                total_invested: metrics.total_invested,
                overall_return_pct: metrics.overall_return_pct,
                fund_count: metrics.fund_count,
            },
            rows,
        }
    }
}
