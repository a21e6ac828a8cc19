//! Tests for the page-load flow against a mock backend.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    use fundlens_api_client::models::{LoginAck, PortfolioSnapshot, UserProfile};
    use fundlens_api_client::{ApiClientError, PortfolioApi, Result as ApiResult};

    use crate::session::{
        LoadOutcome, PortfolioLoader, PortfolioLoaderTrait, SnapshotSource, SnapshotStore,
    };

    /// What the fake backend should answer with.
    enum FetchBehavior {
        Snapshot(PortfolioSnapshot),
        Empty,
        Failure,
    }

    struct MockApi {
        fetch: FetchBehavior,
        login_ok: bool,
        fetch_calls: AtomicUsize,
    }

    impl MockApi {
        fn new(fetch: FetchBehavior) -> Self {
            Self {
                fetch,
                login_ok: true,
                fetch_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PortfolioApi for MockApi {
        async fn login(&self, _profile: &UserProfile) -> ApiResult<LoginAck> {
            if self.login_ok {
                Ok(LoginAck {
                    status: "success".to_string(),
                    user_id: 7,
                })
            } else {
                Err(ApiClientError::Status { code: 500 })
            }
        }

        async fn fetch_portfolio(
            &self,
            _id_token: &str,
        ) -> ApiResult<Option<PortfolioSnapshot>> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            match &self.fetch {
                FetchBehavior::Snapshot(snapshot) => Ok(Some(snapshot.clone())),
                FetchBehavior::Empty => Ok(None),
                FetchBehavior::Failure => Err(ApiClientError::Status { code: 503 }),
            }
        }
    }

    fn snapshot() -> PortfolioSnapshot {
        PortfolioSnapshot {
            total_investment: dec!(500000),
            current_valuation: dec!(600000),
            ..Default::default()
        }
    }

    const SESSION: &str = "user@example.com";

    #[tokio::test]
    async fn successful_fetch_loads_and_caches() {
        let api = Arc::new(MockApi::new(FetchBehavior::Snapshot(snapshot())));
        let store = Arc::new(SnapshotStore::new());
        let loader = PortfolioLoader::new(api.clone(), store.clone());

        let outcome = loader.load(SESSION, "token").await;
        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                snapshot: snapshot(),
                source: SnapshotSource::Backend,
            }
        );

        // One outstanding request per load, and the copy is now cached.
        assert_eq!(api.fetch_calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.get(SESSION), Some(snapshot()));
    }

    #[tokio::test]
    async fn failed_fetch_falls_back_to_cache() {
        let store = Arc::new(SnapshotStore::new());
        store.put(SESSION, &snapshot()).unwrap();

        let api = Arc::new(MockApi::new(FetchBehavior::Failure));
        let loader = PortfolioLoader::new(api, store);

        match loader.load(SESSION, "token").await {
            LoadOutcome::Loaded { snapshot: s, source } => {
                assert_eq!(source, SnapshotSource::Cache);
                assert_eq!(s, snapshot());
            }
            other => panic!("expected cached snapshot, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_backend_falls_back_to_cache() {
        let store = Arc::new(SnapshotStore::new());
        store.put(SESSION, &snapshot()).unwrap();

        let api = Arc::new(MockApi::new(FetchBehavior::Empty));
        let loader = PortfolioLoader::new(api, store);

        match loader.load(SESSION, "token").await {
            LoadOutcome::Loaded { source, .. } => assert_eq!(source, SnapshotSource::Cache),
            other => panic!("expected cached snapshot, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn no_backend_and_no_cache_requires_upload() {
        let api = Arc::new(MockApi::new(FetchBehavior::Failure));
        let loader = PortfolioLoader::new(api, Arc::new(SnapshotStore::new()));

        let outcome = loader.load(SESSION, "token").await;
        assert_eq!(outcome, LoadOutcome::UploadRequired);
    }

    #[tokio::test]
    async fn login_failure_never_propagates() {
        let mut mock = MockApi::new(FetchBehavior::Empty);
        mock.login_ok = false;
        let loader = PortfolioLoader::new(Arc::new(mock), Arc::new(SnapshotStore::new()));

        // Completes without error; sign-in is not blocked by backend sync.
        loader
            .sync_login(&UserProfile {
                name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
                image: None,
            })
            .await;
    }

    #[tokio::test]
    async fn sign_out_clears_the_session_cache() {
        let store = Arc::new(SnapshotStore::new());
        store.put(SESSION, &snapshot()).unwrap();

        let api = Arc::new(MockApi::new(FetchBehavior::Empty));
        let loader = PortfolioLoader::new(api, store.clone());

        loader.sign_out(SESSION);
        assert!(store.get(SESSION).is_none());

        // The next load with a dead backend now requires an upload.
        assert_eq!(loader.load(SESSION, "token").await, LoadOutcome::UploadRequired);
    }
}
