use std::sync::Arc;
use tracing::Span;

use crate::error::SeedError;
use crate::model::Person;
use crate::seed::FakeData;
use crate::store::PersonStore;

/// Rows per physical insert.
pub const RECORDS_PER_BATCH: usize = 100;

/// Number of physical inserts needed for `count` records. Counts below one full batch
/// still produce a single batch; zero produces none.
pub fn batch_count(count: usize) -> usize {
    count.div_ceil(RECORDS_PER_BATCH)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already held records; nothing was written.
    Skipped { existing: i64 },
    Inserted { records: usize, batches: usize },
}

/// Fills an empty store with synthetic people. Meant to run once, before the HTTP
/// server starts accepting requests.
pub struct SeedLoader {
    store: Arc<dyn PersonStore>,
    span: Span,
}

impl SeedLoader {
    pub fn new(store: Arc<dyn PersonStore>, span: Span) -> Self {
        SeedLoader { store, span }
    }

    /// Seed `count` records unless the store already holds any. Any failure is fatal to
    /// startup; the caller must not go on to serve requests.
    pub async fn load(&self, count: usize, fake: &mut dyn FakeData) -> Result<SeedOutcome, SeedError> {
        let existing = self.store.count().await.map_err(SeedError::Count)?;
        if existing > 0 {
            tracing::info!(parent: &self.span, existing, "found rows already in the database, not seeding");
            return Ok(SeedOutcome::Skipped { existing });
        }

        let people: Vec<Person> = (0..count)
            .map(|_| Person {
                id: fake.uuid().to_string(),
                name: fake.name(),
                age: fake.age(),
                email: fake.email(),
                country: fake.country(),
            })
            .collect();

        let batches = batch_count(people.len());
        if batches == 0 {
            tracing::info!(parent: &self.span, "seed count is zero, nothing to insert");
            return Ok(SeedOutcome::Inserted { records: 0, batches: 0 });
        }

        self.store
            .create_batch(&people, RECORDS_PER_BATCH)
            .await
            .map_err(|e| {
                tracing::error!(parent: &self.span, error = %e, "unable to create seed data");
                SeedError::Insert(e)
            })?;
        tracing::info!(parent: &self.span, records = people.len(), batches, "seed data inserted");
        Ok(SeedOutcome::Inserted {
            records: people.len(),
            batches,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_count_rounds_up() {
        assert_eq!(batch_count(0), 0);
        assert_eq!(batch_count(1), 1);
        assert_eq!(batch_count(99), 1);
        assert_eq!(batch_count(100), 1);
        assert_eq!(batch_count(101), 2);
        assert_eq!(batch_count(1000), 10);
    }
}
