mod common;

use std::sync::Arc;

use common::RecordingStore;
use person_service::seed::{FakeData, RECORDS_PER_BATCH};
use person_service::{Person, PersonStore, RandomFakeData, SeedError, SeedLoader, SeedOutcome};
use uuid::Uuid;

fn loader(store: &Arc<RecordingStore>) -> SeedLoader {
    SeedLoader::new(store.clone(), tracing::Span::none())
}

#[tokio::test]
async fn non_empty_store_is_left_alone() {
    let existing = Person {
        id: Uuid::new_v4().to_string(),
        ..Person::new("Ada", 30, "a@x.com", "UK")
    };
    let store = Arc::new(RecordingStore::with_people(vec![existing]));
    let mut fake = RandomFakeData::seeded(1);

    let outcome = loader(&store).load(500, &mut fake).await.unwrap();
    assert_eq!(outcome, SeedOutcome::Skipped { existing: 1 });
    assert_eq!(store.calls(), 1);
    assert_eq!(store.batch_calls(), 0);
    assert_eq!(store.stored().await, 1);
}

#[tokio::test]
async fn seeds_full_batches() {
    let store = Arc::new(RecordingStore::new());
    let mut fake = RandomFakeData::seeded(2);

    let outcome = loader(&store).load(250, &mut fake).await.unwrap();
    assert_eq!(outcome, SeedOutcome::Inserted { records: 250, batches: 3 });
    assert_eq!(store.batch_sizes(), vec![(250, RECORDS_PER_BATCH)]);
    assert_eq!(store.stored().await, 250);

    for person in store.find_all().await.unwrap() {
        assert!(Uuid::parse_str(&person.id).is_ok());
        assert!((1..=100).contains(&person.age));
        assert!(!person.name.is_empty());
    }
}

#[tokio::test]
async fn fewer_than_one_batch_still_writes_every_record() {
    let store = Arc::new(RecordingStore::new());
    let mut fake = RandomFakeData::seeded(3);

    let outcome = loader(&store).load(42, &mut fake).await.unwrap();
    assert_eq!(outcome, SeedOutcome::Inserted { records: 42, batches: 1 });
    assert_eq!(store.batch_calls(), 1);
    assert_eq!(store.stored().await, 42);
}

#[tokio::test]
async fn zero_count_writes_nothing() {
    let store = Arc::new(RecordingStore::new());
    let mut fake = RandomFakeData::seeded(4);

    let outcome = loader(&store).load(0, &mut fake).await.unwrap();
    assert_eq!(outcome, SeedOutcome::Inserted { records: 0, batches: 0 });
    assert_eq!(store.batch_calls(), 0);
}

#[tokio::test]
async fn store_failure_is_fatal() {
    let store = Arc::new(RecordingStore::new());
    store.fail();
    let mut fake = RandomFakeData::seeded(5);

    let err = loader(&store).load(10, &mut fake).await.unwrap_err();
    assert!(matches!(err, SeedError::Count(_)));
}

/// Generator that repeats the same id, so the second insert collides.
struct RepeatingIds(RandomFakeData);

impl FakeData for RepeatingIds {
    fn uuid(&mut self) -> Uuid {
        Uuid::nil()
    }
    fn name(&mut self) -> String {
        self.0.name()
    }
    fn age(&mut self) -> i32 {
        self.0.age()
    }
    fn email(&mut self) -> String {
        self.0.email()
    }
    fn country(&mut self) -> String {
        self.0.country()
    }
}

#[tokio::test]
async fn insert_failure_is_reported_and_nothing_is_kept() {
    let store = Arc::new(RecordingStore::new());
    let mut fake = RepeatingIds(RandomFakeData::seeded(6));

    let err = loader(&store).load(2, &mut fake).await.unwrap_err();
    assert!(matches!(err, SeedError::Insert(_)));
    assert_eq!(store.stored().await, 0);
}
