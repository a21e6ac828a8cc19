//! FundLens API Client Crate
//!
//! This crate owns the wire contract with the FundLens analytics backend.
//! The backend is an opaque collaborator: it parses uploaded statements,
//! computes every portfolio metric (XIRR, CAGR, Sharpe, drawdowns, ...) and
//! serves the result as a single pre-computed [`PortfolioSnapshot`] document.
//! Nothing in this crate computes analytics; it only fetches and decodes.
//!
//! # Endpoints
//!
//! - `POST /auth/login` - syncs the identity-provider profile with the
//!   backend user table. Failures here must never block sign-in; the caller
//!   decides how to degrade.
//! - `GET /portfolio/` - returns the latest snapshot for the bearer token's
//!   user, or JSON `null` when the user has not uploaded a statement yet.
//!
//! # Core Types
//!
//! - [`PortfolioSnapshot`] - the full pre-computed analytics document
//! - [`Holding`] - one scheme/fund position with optional analytics
//! - [`FundAnalytics`] - per-fund risk/return block, every field optional
//! - [`PortfolioApi`] - trait implemented by [`PortfolioApiClient`]

pub mod client;
pub mod errors;
pub mod models;

pub use client::{PortfolioApi, PortfolioApiClient};
pub use errors::{ApiClientError, Result};
pub use models::{
    FundAnalytics, GrowthPoint, Holding, LoginAck, PortfolioSnapshot, RecoveryDays, UserProfile,
};
