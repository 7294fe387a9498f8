#![deny(missing_docs)]
//! In-memory implementations of wayfarer's ChatStore and TripStore traits.
//!
//! Rows live in a `Vec` behind a `RwLock`, in insertion order. Ids are
//! random UUIDs and timestamps come from the system clock, mirroring the
//! defaults of the hosted `chat_messages` and `trips` tables.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use wayfarer_types::{ChatStore, NewMessage, StoreError, StoredMessage, TripId, UserId};

mod trips;

pub use trips::MemoryTripStore;

/// In-memory chat store backed by a `Vec` behind a `RwLock`.
///
/// Suitable for testing, prototyping, and single-process use cases
/// where persistence across restarts is not required.
pub struct MemoryChatStore {
    rows: RwLock<Vec<StoredMessage>>,
}

impl MemoryChatStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with rows, e.g. fixtures.
    pub fn with_rows(rows: Vec<StoredMessage>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Number of stored rows across all users and trips.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Whether the store holds no rows.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Snapshot of every stored row, in insertion order.
    pub async fn rows(&self) -> Vec<StoredMessage> {
        self.rows.read().await.clone()
    }
}

impl Default for MemoryChatStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatStore for MemoryChatStore {
    async fn insert(&self, message: NewMessage) -> Result<StoredMessage, StoreError> {
        let row = StoredMessage {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: message.user_id,
            trip_id: message.trip_id,
            role: message.role,
            content: message.content,
            created_at: Utc::now(),
        };
        self.rows.write().await.push(row.clone());
        Ok(row)
    }

    async fn history(
        &self,
        user: &UserId,
        trip: Option<&TripId>,
        limit: usize,
    ) -> Result<Vec<StoredMessage>, StoreError> {
        let rows = self.rows.read().await;
        let mut matching: Vec<StoredMessage> = rows
            .iter()
            .filter(|row| &row.user_id == user && row.trip_id.as_ref() == trip)
            .cloned()
            .collect();
        // Stable: rows with equal timestamps keep insertion order.
        matching.sort_by_key(|row| row.created_at);
        matching.truncate(limit);
        Ok(matching)
    }
}
