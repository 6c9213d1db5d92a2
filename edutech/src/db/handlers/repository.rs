//! Base repository trait for database operations.

/// Contains the Repository trait.
///
/// A repository is a data access layer for a single postgres table. It wraps a
/// connection (or transaction) and provides strongly-typed operations on that
/// table.
use crate::db::errors::Result;

/// Base repository trait providing the common entity operations.
///
/// Listing queries vary too much between entities in this domain (recent-N
/// joins, user-scoped filters, fixed-size listings) to be generalized here,
/// so repositories expose those as inherent methods.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The response/DTO type returned by operations
    type Response;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// Create a new entity
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// Get an entity by ID
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>>;

    /// Delete an entity by ID, returning whether a row was affected.
    ///
    /// "Delete" is interpreted per entity: conversations are soft-deleted
    /// (lifecycle state flip), users are removed outright.
    async fn delete(&mut self, id: Self::Id) -> Result<bool>;
}
