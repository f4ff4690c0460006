//! Persistence boundary for Person records. The only layer that performs database I/O.

mod memory;
mod postgres;

pub use memory::MemoryPersonStore;
pub use postgres::PgPersonStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::model::Person;

/// Narrow contract the resource handler and the seed loader depend on.
///
/// Implementations must be safe to share across request tasks. Operations keyed by id
/// report a missing record as [`StoreError::NotFound`], never as a generic failure.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Every record, in the order the backend yields them.
    async fn find_all(&self) -> Result<Vec<Person>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Person, StoreError>;

    /// Insert one record. An empty `person.id` is assigned by the store.
    async fn create(&self, person: Person) -> Result<Person, StoreError>;

    /// Overwrite every field of `id` with `person`'s values. `person.id` is ignored.
    async fn replace(&self, id: Uuid, person: Person) -> Result<Person, StoreError>;

    /// Apply only the non-default fields of `patch`. Returns the number of rows touched;
    /// zero means no record has that id.
    async fn merge_update(&self, id: Uuid, patch: &Person) -> Result<u64, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;

    /// Insert `people` using physical inserts of at most `batch_size` rows each.
    async fn create_batch(&self, people: &[Person], batch_size: usize) -> Result<(), StoreError>;
}

/// Parse a stored or client-supplied id.
pub(crate) fn parse_stored_id(id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}
