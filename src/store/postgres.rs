//! [`PersonStore`] over a PostgreSQL pool.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{parse_stored_id, PersonStore};
use crate::error::StoreError;
use crate::model::Person;
use crate::sql::{max_rows_per_insert, PersonTable};

/// Row shape of the `people` table. Kept apart from [`Person`] so the wire type carries
/// no column metadata.
#[derive(sqlx::FromRow)]
struct PersonRow {
    id: Uuid,
    name: String,
    age: i32,
    email: String,
    country: String,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person {
            id: row.id.to_string(),
            name: row.name,
            age: row.age,
            email: row.email,
            country: row.country,
        }
    }
}

#[derive(Clone)]
pub struct PgPersonStore {
    pool: PgPool,
    table: PersonTable,
}

impl PgPersonStore {
    pub fn new(pool: PgPool, table: PersonTable) -> Self {
        PgPersonStore { pool, table }
    }

    async fn insert_with_id(&self, id: Uuid, person: &Person) -> Result<Person, StoreError> {
        let sql = self.table.insert_rows(1);
        tracing::debug!(sql = %sql, %id, "query");
        let row: PersonRow = sqlx::query_as(&sql)
            .bind(id)
            .bind(&person.name)
            .bind(person.age)
            .bind(&person.email)
            .bind(&person.country)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }
}

#[async_trait]
impl PersonStore for PgPersonStore {
    async fn find_all(&self) -> Result<Vec<Person>, StoreError> {
        let sql = self.table.select_all();
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<PersonRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Person, StoreError> {
        let sql = self.table.select_by_id();
        tracing::debug!(sql = %sql, %id, "query");
        let row: Option<PersonRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Person::from).ok_or(StoreError::NotFound)
    }

    async fn create(&self, person: Person) -> Result<Person, StoreError> {
        if person.has_id() {
            let id = parse_stored_id(&person.id)?;
            return self.insert_with_id(id, &person).await;
        }
        let sql = self.table.insert_generated_id();
        tracing::debug!(sql = %sql, "query");
        let row: PersonRow = sqlx::query_as(&sql)
            .bind(&person.name)
            .bind(person.age)
            .bind(&person.email)
            .bind(&person.country)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn replace(&self, id: Uuid, person: Person) -> Result<Person, StoreError> {
        let sql = self.table.replace();
        tracing::debug!(sql = %sql, %id, "query");
        let row: Option<PersonRow> = sqlx::query_as(&sql)
            .bind(id)
            .bind(&person.name)
            .bind(person.age)
            .bind(&person.email)
            .bind(&person.country)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Person::from).ok_or(StoreError::NotFound)
    }

    async fn merge_update(&self, id: Uuid, patch: &Person) -> Result<u64, StoreError> {
        let sql = self.table.merge();
        tracing::debug!(sql = %sql, %id, "query");
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(&patch.name)
            .bind(patch.age)
            .bind(&patch.email)
            .bind(&patch.country)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let sql = self.table.delete();
        tracing::debug!(sql = %sql, %id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let sql = self.table.count();
        tracing::debug!(sql = %sql, "query");
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }

    async fn create_batch(&self, people: &[Person], batch_size: usize) -> Result<(), StoreError> {
        if people.is_empty() {
            return Ok(());
        }
        let batch_size = batch_size.clamp(1, max_rows_per_insert());
        let mut tx = self.pool.begin().await?;
        for chunk in people.chunks(batch_size) {
            let sql = self.table.insert_rows(chunk.len());
            tracing::debug!(rows = chunk.len(), "batch insert (tx)");
            let mut query = sqlx::query(&sql);
            for person in chunk {
                let id = if person.has_id() {
                    parse_stored_id(&person.id)?
                } else {
                    Uuid::new_v4()
                };
                query = query
                    .bind(id)
                    .bind(&person.name)
                    .bind(person.age)
                    .bind(&person.email)
                    .bind(&person.country);
            }
            query.execute(&mut *tx).await?;
        }
        tx.commit().await?;
        Ok(())
    }
}
