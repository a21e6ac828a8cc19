//! Session-scoped snapshot caching and the page-load flow.

mod session_service;
mod snapshot_store;

#[cfg(test)]
mod session_service_tests;

pub use session_service::{LoadOutcome, PortfolioLoader, PortfolioLoaderTrait, SnapshotSource};
pub use snapshot_store::SnapshotStore;
