//! Dashboard view: stat cards, allocation slices, benchmark comparison,
//! growth series and the sortable holdings table.

mod dashboard_model;
mod dashboard_service;


pub use dashboard_model::{
    AllocationSlice, BenchmarkComparison, DashboardSummary, GrowthPointMetrics, HoldingRow,
};
pub use dashboard_service::{DashboardService, DashboardServiceTrait};
