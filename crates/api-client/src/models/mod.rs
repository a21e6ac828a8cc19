//! Wire models for the backend snapshot document.

mod auth;
mod holding;
mod snapshot;


pub use auth::{LoginAck, UserProfile};
pub use holding::{FundAnalytics, Holding, RecoveryDays};
pub use snapshot::{GrowthPoint, PortfolioSnapshot};
