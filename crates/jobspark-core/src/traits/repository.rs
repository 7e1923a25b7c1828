//! Generic repository trait for record storage.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic CRUD repository trait.
///
/// `New` is the fully-populated creation payload and `Patch` the partial
/// update payload. Lookups that miss return `Ok(None)`; turning a miss into
/// a not-found error is the service layer's job.
#[async_trait]
pub trait Repository<Entity, Id, New, Patch>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    Id: Send + Sync + 'static,
    New: Send + 'static,
    Patch: Send + 'static,
{
    /// Find an entity by its identifier.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Entity>>;

    /// Snapshot of every entity, in collection order.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Create a new entity and return it.
    async fn create(&self, data: New) -> AppResult<Entity>;

    /// Merge `patch` over the entity with this identifier.
    async fn update(&self, id: Id, patch: Patch) -> AppResult<Option<Entity>>;

    /// Remove the entity and return it.
    async fn delete(&self, id: Id) -> AppResult<Option<Entity>>;

    /// Count total entities.
    async fn count(&self) -> AppResult<u64>;
}
