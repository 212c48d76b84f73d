//! Ordered per-user text entries (notes, tasks)
//!
//! Uses DashMap for thread-safe concurrent access: appends for different
//! users never contend, and an append is atomic with respect to its own key.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use dashmap::DashMap;
use std::sync::Arc;

use crate::transport::UserId;

/// Append-only (until cleared) sequences of text entries, one per user.
///
/// Cloning is cheap and aliases the same underlying map, so the store can be
/// constructed once at startup and handed to every handler.
#[derive(Clone, Default)]
pub struct UserKeyedStore {
    entries: Arc<DashMap<UserId, Vec<String>>>,
}

impl UserKeyedStore {
    pub fn new() -> Self {
        UserKeyedStore {
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Add `entry` to the end of `user`'s sequence, creating it if absent.
    ///
    /// Never fails; there is no size limit. Emptiness checks belong to the
    /// caller, which owns the user-facing re-prompt.
    pub fn append(&self, user: UserId, entry: impl Into<String>) {
        self.entries.entry(user).or_default().push(entry.into());
    }

    /// Snapshot of `user`'s sequence in insertion order; empty if absent.
    pub fn list(&self, user: UserId) -> Vec<String> {
        self.entries
            .get(&user)
            .map(|entries| entries.value().clone())
            .unwrap_or_default()
    }

    /// Remove `user`'s sequence entirely.
    pub fn clear(&self, user: UserId) {
        self.entries.remove(&user);
    }
}
