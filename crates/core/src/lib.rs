//! FundLens Core Crate
//!
//! View-model core for the FundLens investment dashboard. The backend ships a
//! single pre-computed [`PortfolioSnapshot`]; everything here is a pure,
//! synchronous projection of that immutable document into display-ready
//! models:
//!
//! - [`projection`] - sorting, time-range filtering and derived summary
//!   metrics over holdings and the growth series
//! - [`dashboard`] - stat cards, allocation slices, benchmark comparison and
//!   the sortable holdings table
//! - [`category`] - the per-asset-class drill-down view
//! - [`display`] - placeholder-aware cell formatting (currency, percents,
//!   score bands)
//! - [`session`] - the session snapshot store and the page-load flow
//!   (backend fetch, cache fallback, upload redirect)
//!
//! Sorting and filtering never mutate the snapshot: rapid repeated
//! interactions can only supersede the previously requested view, never
//! corrupt shared state.

pub mod category;
pub mod constants;
pub mod dashboard;
pub mod display;
pub mod errors;
pub mod projection;
pub mod session;

pub use errors::{Error, Result};

// Re-export the wire models so downstream callers need only one crate.
pub use fundlens_api_client::models::{
    FundAnalytics, GrowthPoint, Holding, LoginAck, PortfolioSnapshot, RecoveryDays, UserProfile,
};
