//! In-process [`PersonStore`]. Same semantics as the Postgres store; state lives for the
//! lifetime of the value.

use async_trait::async_trait;
use std::sync::RwLock;
use uuid::Uuid;

use super::{parse_stored_id, PersonStore};
use crate::error::StoreError;
use crate::model::Person;

/// Rows kept in insertion order, which is also the order `find_all` returns.
#[derive(Default)]
pub struct MemoryPersonStore {
    rows: RwLock<Vec<(Uuid, Person)>>,
}

impl MemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_people(people: impl IntoIterator<Item = Person>) -> Result<Self, StoreError> {
        let store = Self::new();
        {
            let mut rows = store.write()?;
            for person in people {
                let (id, person) = assign_id(person)?;
                insert_unique(&mut rows, id, person)?;
            }
        }
        Ok(store)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<(Uuid, Person)>>, StoreError> {
        self.rows
            .read()
            .map_err(|_| StoreError::Backend("person store lock poisoned".into()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<(Uuid, Person)>>, StoreError> {
        self.rows
            .write()
            .map_err(|_| StoreError::Backend("person store lock poisoned".into()))
    }
}

fn assign_id(mut person: Person) -> Result<(Uuid, Person), StoreError> {
    let id = if person.has_id() {
        parse_stored_id(&person.id)?
    } else {
        Uuid::new_v4()
    };
    person.id = id.to_string();
    Ok((id, person))
}

fn insert_unique(rows: &mut Vec<(Uuid, Person)>, id: Uuid, person: Person) -> Result<(), StoreError> {
    if rows.iter().any(|(existing, _)| *existing == id) {
        return Err(StoreError::Backend(format!(
            "duplicate key value violates unique constraint: id {}",
            id
        )));
    }
    rows.push((id, person));
    Ok(())
}

#[async_trait]
impl PersonStore for MemoryPersonStore {
    async fn find_all(&self) -> Result<Vec<Person>, StoreError> {
        Ok(self.read()?.iter().map(|(_, p)| p.clone()).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Person, StoreError> {
        self.read()?
            .iter()
            .find(|(k, _)| *k == id)
            .map(|(_, p)| p.clone())
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, person: Person) -> Result<Person, StoreError> {
        let (id, person) = assign_id(person)?;
        let mut rows = self.write()?;
        insert_unique(&mut rows, id, person.clone())?;
        Ok(person)
    }

    async fn replace(&self, id: Uuid, mut person: Person) -> Result<Person, StoreError> {
        let mut rows = self.write()?;
        let slot = rows
            .iter_mut()
            .find(|(k, _)| *k == id)
            .ok_or(StoreError::NotFound)?;
        person.id = id.to_string();
        slot.1 = person.clone();
        Ok(person)
    }

    async fn merge_update(&self, id: Uuid, patch: &Person) -> Result<u64, StoreError> {
        let mut rows = self.write()?;
        match rows.iter_mut().find(|(k, _)| *k == id) {
            Some((_, current)) => {
                current.merge_from(patch);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut rows = self.write()?;
        let before = rows.len();
        rows.retain(|(k, _)| *k != id);
        if rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.read()?.len() as i64)
    }

    async fn create_batch(&self, people: &[Person], batch_size: usize) -> Result<(), StoreError> {
        let batch_size = batch_size.max(1);
        // All-or-nothing, like the transactional Postgres insert.
        let mut rows = self.write()?;
        let mut staged = rows.clone();
        for chunk in people.chunks(batch_size) {
            for person in chunk {
                let (id, person) = assign_id(person.clone())?;
                insert_unique(&mut staged, id, person)?;
            }
        }
        *rows = staged;
        Ok(())
    }
}
