//! Storage traits for chat history and trips.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::{NewMessage, NewTrip, StoredMessage, StoredTrip, TripId, UserId};

/// Persistent chat history, scoped per user and per trip.
///
/// Implementations back onto the hosted database in production and onto
/// memory in tests.
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Insert a message and return the stored row.
    async fn insert(&self, message: NewMessage) -> Result<StoredMessage, StoreError>;

    /// Return up to `limit` messages for `user` in the given trip scope,
    /// ordered by `created_at` ascending.
    ///
    /// A `None` trip selects only messages that have no trip.
    async fn history(
        &self,
        user: &UserId,
        trip: Option<&TripId>,
        limit: usize,
    ) -> Result<Vec<StoredMessage>, StoreError>;
}

#[async_trait]
impl<T: ChatStore + ?Sized> ChatStore for std::sync::Arc<T> {
    async fn insert(&self, message: NewMessage) -> Result<StoredMessage, StoreError> {
        (**self).insert(message).await
    }

    async fn history(
        &self,
        user: &UserId,
        trip: Option<&TripId>,
        limit: usize,
    ) -> Result<Vec<StoredMessage>, StoreError> {
        (**self).history(user, trip, limit).await
    }
}

/// Persistent trips, owned by a user.
#[async_trait]
pub trait TripStore: Send + Sync {
    /// Insert a trip and return the stored row with its new id.
    async fn insert_trip(&self, trip: NewTrip) -> Result<StoredTrip, StoreError>;

    /// Return every trip owned by `user`, newest first.
    async fn trips(&self, user: &UserId) -> Result<Vec<StoredTrip>, StoreError>;
}

#[async_trait]
impl<T: TripStore + ?Sized> TripStore for std::sync::Arc<T> {
    async fn insert_trip(&self, trip: NewTrip) -> Result<StoredTrip, StoreError> {
        (**self).insert_trip(trip).await
    }

    async fn trips(&self, user: &UserId) -> Result<Vec<StoredTrip>, StoreError> {
        (**self).trips(user).await
    }
}
