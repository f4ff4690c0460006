//! Person resource handler: store calls and result interpretation for the five resource
//! operations. Path ids arrive already parsed (see [`crate::extractors::PersonId`]); HTTP
//! concerns (status codes, bodies) live in `handlers`.

use std::sync::Arc;
use tracing::Span;
use uuid::Uuid;

use crate::error::{AppError, StoreError};
use crate::model::Person;
use crate::service::validation::{is_valid_id, INVALID_IDENTIFIER};
use crate::store::PersonStore;

pub struct PersonService {
    store: Arc<dyn PersonStore>,
    span: Span,
}

impl PersonService {
    /// `span` is the parent of every event this service emits.
    pub fn new(store: Arc<dyn PersonStore>, span: Span) -> Self {
        PersonService { store, span }
    }

    pub fn store(&self) -> &Arc<dyn PersonStore> {
        &self.store
    }

    /// All records, unfiltered and unpaginated, in store order.
    pub async fn list(&self) -> Result<Vec<Person>, AppError> {
        let people = self.store.find_all().await.map_err(|e| self.fail("list", e))?;
        tracing::debug!(parent: &self.span, count = people.len(), "listed people");
        Ok(people)
    }

    /// Insert `person`. A non-empty client id must be a valid UUID; an empty one is
    /// assigned by the store. Returns the stored record.
    pub async fn create(&self, person: Person) -> Result<Person, AppError> {
        if person.has_id() && !is_valid_id(&person.id) {
            return Err(AppError::BadRequest(INVALID_IDENTIFIER.into()));
        }
        let created = self.store.create(person).await.map_err(|e| self.fail("create", e))?;
        tracing::info!(parent: &self.span, id = %created.id, "person created");
        Ok(created)
    }

    pub async fn read(&self, id: Uuid) -> Result<Person, AppError> {
        self.store.find_by_id(id).await.map_err(|e| self.fail("read", e))
    }

    /// Full replace. The record must exist first; the path id always wins over any id in
    /// the payload, and fields missing from the payload are reset to their zero values.
    pub async fn replace(&self, id: Uuid, mut person: Person) -> Result<Person, AppError> {
        // The write is never attempted unless the existence check succeeded.
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| self.fail("replace existence check", e))?;
        person.id = id.to_string();
        let replaced = self
            .store
            .replace(id, person)
            .await
            .map_err(|e| self.fail("replace", e))?;
        tracing::info!(parent: &self.span, %id, "person replaced");
        Ok(replaced)
    }

    /// Merge the non-default fields of `patch` into the record, then return the record as
    /// re-read from the store.
    pub async fn merge(&self, id: Uuid, mut patch: Person) -> Result<Person, AppError> {
        patch.id = id.to_string();
        let affected = self
            .store
            .merge_update(id, &patch)
            .await
            .map_err(|e| self.fail("merge", e))?;
        if affected == 0 {
            return Err(AppError::NotFound(StoreError::NotFound.to_string()));
        }
        tracing::info!(parent: &self.span, %id, affected, "person merged");
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| self.fail("merge re-read", e))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.store.delete(id).await.map_err(|e| self.fail("delete", e))?;
        tracing::info!(parent: &self.span, %id, "person deleted");
        Ok(())
    }

    fn fail(&self, op: &'static str, e: StoreError) -> AppError {
        match e {
            StoreError::NotFound => {
                tracing::debug!(parent: &self.span, op, "record not found");
            }
            ref other => {
                tracing::warn!(parent: &self.span, op, error = %other, "store failure");
            }
        }
        e.into()
    }
}
