//! Service for projecting a snapshot into dashboard view models.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use fundlens_api_client::models::{GrowthPoint, PortfolioSnapshot};

use crate::projection::{filter_by_time_range, sort_holdings, SortState, TimeRange};

use super::{
    AllocationSlice, BenchmarkComparison, DashboardSummary, HoldingRow,
};

/// Trait for the dashboard view service. All operations are synchronous
/// projections of an immutable snapshot reference.
pub trait DashboardServiceTrait: Send + Sync {
    fn summary(&self, snapshot: &PortfolioSnapshot) -> DashboardSummary;

    /// Allocation donut slices, largest value first.
    fn allocation_slices(&self, snapshot: &PortfolioSnapshot) -> Vec<AllocationSlice>;

    /// `None` when the backend supplied no benchmark XIRR.
    fn benchmark_comparison(&self, snapshot: &PortfolioSnapshot) -> Option<BenchmarkComparison>;

    /// Growth series filtered to the requested range, relative to `today`.
    fn growth_series(
        &self,
        snapshot: &PortfolioSnapshot,
        range: TimeRange,
        today: NaiveDate,
    ) -> Vec<GrowthPoint>;

    /// Holdings table rows, reordered by `sort` when present; snapshot order
    /// otherwise.
    fn table_rows(&self, snapshot: &PortfolioSnapshot, sort: Option<SortState>)
        -> Vec<HoldingRow>;
}

pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardServiceTrait for DashboardService {
    fn summary(&self, snapshot: &PortfolioSnapshot) -> DashboardSummary {
        DashboardSummary::from_snapshot(snapshot)
    }

    fn allocation_slices(&self, snapshot: &PortfolioSnapshot) -> Vec<AllocationSlice> {
        let total: Decimal = snapshot.allocation.values().copied().sum();

        let mut slices: Vec<AllocationSlice> = snapshot
            .allocation
            .iter()
            .map(|(asset_class, value)| {
                let percent_of_total = if total > Decimal::ZERO {
                    (*value / total * dec!(100)).round_dp(2)
                } else {
                    Decimal::ZERO
                };
                AllocationSlice {
                    asset_class: asset_class.clone(),
                    value: *value,
                    percent_of_total,
                }
            })
            .collect();

        // Largest slice first
        slices.sort_by(|a, b| b.value.cmp(&a.value));
        slices
    }

    fn benchmark_comparison(&self, snapshot: &PortfolioSnapshot) -> Option<BenchmarkComparison> {
        let benchmark_xirr = snapshot.benchmark_xirr?;
        let portfolio_xirr_pct = snapshot.xirr.unwrap_or_default() * dec!(100);
        let benchmark_xirr_pct = benchmark_xirr * dec!(100);
        let delta_pct = portfolio_xirr_pct - benchmark_xirr_pct;

        Some(BenchmarkComparison {
            portfolio_xirr_pct,
            benchmark_xirr_pct,
            delta_pct,
            beating_benchmark: delta_pct >= Decimal::ZERO,
        })
    }

    fn growth_series(
        &self,
        snapshot: &PortfolioSnapshot,
        range: TimeRange,
        today: NaiveDate,
    ) -> Vec<GrowthPoint> {
        filter_by_time_range(&snapshot.growth_chart, range, today)
    }

    fn table_rows(
        &self,
        snapshot: &PortfolioSnapshot,
        sort: Option<SortState>,
    ) -> Vec<HoldingRow> {
        debug!(
            "Building {} table rows (sort: {:?})",
            snapshot.holdings.len(),
            sort
        );

        match sort {
            Some(state) => sort_holdings(&snapshot.holdings, state.key, state.direction)
                .iter()
                .map(HoldingRow::from_holding)
                .collect(),
            None => snapshot
                .holdings
                .iter()
                .map(HoldingRow::from_holding)
                .collect(),
        }
    }
}
