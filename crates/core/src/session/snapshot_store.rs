//! Session-scoped snapshot cache.
//!
//! An explicit handle rather than ambient global state: callers hold the
//! store and pass it where it is needed. Each session owns exactly one
//! cache slot holding the last-fetched snapshot as a JSON string, replaced
//! wholesale on every successful fetch and cleared on sign-out.

use dashmap::DashMap;
use log::warn;

use fundlens_api_client::models::PortfolioSnapshot;

use crate::errors::Result;

#[derive(Default)]
pub struct SnapshotStore {
    entries: DashMap<String, String>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Caches the snapshot for this session, replacing any previous copy.
    pub fn put(&self, session: &str, snapshot: &PortfolioSnapshot) -> Result<()> {
        let serialized = serde_json::to_string(snapshot)?;
        self.entries.insert(session.to_string(), serialized);
        Ok(())
    }

    /// Last cached snapshot for this session. A corrupt cached document is
    /// treated as a miss (and evicted), never an error.
    pub fn get(&self, session: &str) -> Option<PortfolioSnapshot> {
        let cached = self.entries.get(session)?;
        match serde_json::from_str(cached.value()) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                drop(cached);
                warn!("Discarding corrupt cached snapshot for session: {}", e);
                self.entries.remove(session);
                None
            }
        }
    }

    /// Sign-out: drops the session's cached snapshot.
    pub fn clear(&self, session: &str) {
        self.entries.remove(session);
    }

    pub fn clear_all(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn put_get_clear_round_trip() {
        let store = SnapshotStore::new();
        let snapshot = PortfolioSnapshot {
            total_investment: dec!(1000),
            ..Default::default()
        };

        store.put("user@example.com", &snapshot).unwrap();
        assert_eq!(store.get("user@example.com"), Some(snapshot));

        store.clear("user@example.com");
        assert_eq!(store.get("user@example.com"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn sessions_are_isolated() {
        let store = SnapshotStore::new();
        store
            .put("a@example.com", &PortfolioSnapshot::default())
            .unwrap();
        assert!(store.get("b@example.com").is_none());
    }

    #[test]
    fn corrupt_entry_reads_as_miss_and_is_evicted() {
        let store = SnapshotStore::new();
        store
            .entries
            .insert("user@example.com".to_string(), "{not json".to_string());

        assert!(store.get("user@example.com").is_none());
        assert!(store.is_empty());
    }
}
