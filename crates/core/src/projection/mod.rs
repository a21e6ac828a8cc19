//! Holdings projection engine: sorting, time-range filtering and derived
//! summary metrics. Pure request/response transforms; no state machine.

mod projection_service;
mod sort_key;
mod time_range;


pub use projection_service::{
    derive_summary_metrics, derived_return_pct, filter_by_time_range, holdings_in_class,
    sort_holdings, SummaryMetrics,
};
pub use sort_key::{SortDirection, SortKey, SortState};
pub use time_range::TimeRange;
