//! The achievement flag.
//!
//! The exhibit persists exactly one thing: a badge awarded for a
//! qualifying quadrat survey. The write is expressed as an effect over an
//! injectable [`BadgeStore`] environment so the scenario logic stays pure
//! and the shell decides where the flag actually lives.
//!
//! In-scope code only ever writes the flag; `get` exists because the
//! consumer is outside this crate and the capability stays generic.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use stillwater::effect::Effect;
use stillwater::prelude::*;

/// Badges a visitor can earn.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Badge {
    /// Awarded for a coverage estimate within tolerance
    JuniorScientist,
}

impl Badge {
    /// Storage key the badge is written under.
    pub fn key(&self) -> &'static str {
        match self {
            Self::JuniorScientist => "seagrass_badge",
        }
    }

    /// Stored marker value.
    pub fn value(&self) -> &'static str {
        match self {
            Self::JuniorScientist => "junior_scientist",
        }
    }
}

/// Errors from a badge store backend.
#[derive(Debug, thiserror::Error)]
pub enum BadgeError {
    #[error("badge store unavailable: {0}")]
    Unavailable(String),
}

/// Key-value capability for persisting badges.
///
/// `put` must be idempotent: writing the same badge twice is
/// indistinguishable from writing it once.
pub trait BadgeStore: Clone + Send + Sync {
    fn put(&self, key: &str, value: &str) -> Result<(), BadgeError>;

    fn get(&self, key: &str) -> Result<Option<String>, BadgeError>;
}

/// Persist a badge into the environment's store.
///
/// The returned effect performs the one side effect in the crate; run it
/// from the shell once the survey game reports an earned badge.
pub fn award<E>(badge: Badge) -> impl Effect<Output = (), Error = BadgeError, Env = E>
where
    E: BadgeStore + 'static,
{
    from_fn(move |env: &E| env.put(badge.key(), badge.value()))
}

/// In-memory store for tests and demos.
#[derive(Clone, Default)]
pub struct MemoryBadgeStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBadgeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BadgeStore for MemoryBadgeStore {
    fn put(&self, key: &str, value: &str) -> Result<(), BadgeError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| BadgeError::Unavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, BadgeError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| BadgeError::Unavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn award_writes_the_flag() {
        let store = MemoryBadgeStore::new();

        award(Badge::JuniorScientist).run(&store).await.unwrap();

        assert_eq!(
            store.get("seagrass_badge").unwrap().as_deref(),
            Some("junior_scientist")
        );
    }

    #[tokio::test]
    async fn award_is_idempotent() {
        let store = MemoryBadgeStore::new();

        award(Badge::JuniorScientist).run(&store).await.unwrap();
        award(Badge::JuniorScientist).run(&store).await.unwrap();

        assert_eq!(
            store.get("seagrass_badge").unwrap().as_deref(),
            Some("junior_scientist")
        );
    }

    #[test]
    fn unearned_keys_read_back_empty() {
        let store = MemoryBadgeStore::new();
        assert!(store.get("seagrass_badge").unwrap().is_none());
    }
}
