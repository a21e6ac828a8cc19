//! The page-load flow: one backend fetch, cache fallback, upload redirect.

use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};

use fundlens_api_client::models::{PortfolioSnapshot, UserProfile};
use fundlens_api_client::PortfolioApi;

use super::SnapshotStore;

/// Where a loaded snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotSource {
    Backend,
    Cache,
}

/// Result of a page-load. Degraded paths are outcomes, not errors: there is
/// no fatal state in this flow.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded {
        snapshot: PortfolioSnapshot,
        source: SnapshotSource,
    },
    /// No backend snapshot and no cached copy: the caller redirects to the
    /// statement upload flow.
    UploadRequired,
}

#[async_trait]
pub trait PortfolioLoaderTrait: Send + Sync {
    /// Loads the snapshot for a page render. Exactly one outstanding fetch,
    /// no retry: a failed or empty fetch falls back to the session cache,
    /// and an empty cache means the upload redirect.
    async fn load(&self, session: &str, id_token: &str) -> LoadOutcome;

    /// Syncs the identity-provider profile with the backend. Failures are
    /// logged and swallowed; sign-in completes regardless.
    async fn sync_login(&self, profile: &UserProfile);

    /// Sign-out: clears this session's cached snapshot.
    fn sign_out(&self, session: &str);
}

pub struct PortfolioLoader {
    api: Arc<dyn PortfolioApi>,
    store: Arc<SnapshotStore>,
}

impl PortfolioLoader {
    pub fn new(api: Arc<dyn PortfolioApi>, store: Arc<SnapshotStore>) -> Self {
        Self { api, store }
    }

    fn fall_back(&self, session: &str) -> LoadOutcome {
        match self.store.get(session) {
            Some(snapshot) => LoadOutcome::Loaded {
                snapshot,
                source: SnapshotSource::Cache,
            },
            None => LoadOutcome::UploadRequired,
        }
    }
}

#[async_trait]
impl PortfolioLoaderTrait for PortfolioLoader {
    async fn load(&self, session: &str, id_token: &str) -> LoadOutcome {
        match self.api.fetch_portfolio(id_token).await {
            Ok(Some(snapshot)) => {
                if let Err(e) = self.store.put(session, &snapshot) {
                    // Caching is best-effort; the fetched snapshot still renders.
                    warn!("Failed to cache snapshot: {}", e);
                }
                LoadOutcome::Loaded {
                    snapshot,
                    source: SnapshotSource::Backend,
                }
            }
            Ok(None) => {
                info!("Backend has no snapshot for this user, trying cache");
                self.fall_back(session)
            }
            Err(e) => {
                warn!("Snapshot fetch failed, trying cache: {}", e);
                self.fall_back(session)
            }
        }
    }

    async fn sync_login(&self, profile: &UserProfile) {
        match self.api.login(profile).await {
            Ok(ack) => info!("Login synced (user_id {})", ack.user_id),
            Err(e) => warn!("Login sync failed, continuing sign-in: {}", e),
        }
    }

    fn sign_out(&self, session: &str) {
        self.store.clear(session);
    }
}
