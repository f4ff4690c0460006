//! Startup seeding of an empty store with synthetic people.

mod generator;
mod loader;

pub use generator::{FakeData, RandomFakeData};
pub use loader::{batch_count, SeedLoader, SeedOutcome, RECORDS_PER_BATCH};
