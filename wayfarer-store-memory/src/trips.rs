//! In-memory trip storage.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use wayfarer_types::{NewTrip, StoreError, StoredTrip, TripId, TripStore, UserId};

/// In-memory trip store backed by a `Vec` behind a `RwLock`.
pub struct MemoryTripStore {
    trips: RwLock<Vec<StoredTrip>>,
}

impl MemoryTripStore {
    /// Create a new empty trip store.
    pub fn new() -> Self {
        Self {
            trips: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored trips across all users.
    pub async fn len(&self) -> usize {
        self.trips.read().await.len()
    }

    /// Whether the store holds no trips.
    pub async fn is_empty(&self) -> bool {
        self.trips.read().await.is_empty()
    }
}

impl Default for MemoryTripStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TripStore for MemoryTripStore {
    async fn insert_trip(&self, trip: NewTrip) -> Result<StoredTrip, StoreError> {
        let row = StoredTrip {
            id: TripId::new(uuid::Uuid::new_v4().to_string()),
            user_id: trip.user_id,
            name: trip.name,
            description: trip.description,
            is_ai_generated: trip.is_ai_generated,
            status: trip.status,
            created_at: Utc::now(),
        };
        self.trips.write().await.push(row.clone());
        Ok(row)
    }

    async fn trips(&self, user: &UserId) -> Result<Vec<StoredTrip>, StoreError> {
        let trips = self.trips.read().await;
        let mut owned: Vec<StoredTrip> = trips
            .iter()
            .filter(|trip| &trip.user_id == user)
            .cloned()
            .collect();
        // Newest first; equal timestamps keep the later insert first.
        owned.reverse();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }
}
