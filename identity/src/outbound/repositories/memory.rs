use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::gateway::errors::StoreError;
use crate::domain::gateway::models::UserRecord;
use crate::domain::gateway::ports::UserStore;

/// In-memory user store keyed by subject.
///
/// Backs demos and tests; production deployments implement [`UserStore`]
/// over a persistent key-value or relational store instead. Check-and-insert
/// happens under a single write lock, which gives the per-subject atomicity
/// the store contract requires.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find(&self, subject: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(users.get(subject).cloned())
    }

    async fn insert(&self, record: UserRecord) -> Result<(), StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        match users.entry(record.subject.to_string()) {
            Entry::Occupied(entry) => Err(StoreError::AlreadyExists(entry.key().clone())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn exists(&self, subject: &str) -> Result<bool, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(users.contains_key(subject))
    }
}
