#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use person_service::{
    build_router, AppState, MemoryPersonStore, Person, PersonService, PersonStore, StoreError,
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

/// Wraps the in-memory store, counting every call. With `failing` set, every call
/// returns a backend error instead; `fail_on` does the same for one operation only.
#[derive(Default)]
pub struct RecordingStore {
    inner: MemoryPersonStore,
    calls: AtomicUsize,
    batch_calls: AtomicUsize,
    batch_sizes: Mutex<Vec<(usize, usize)>>,
    failing: AtomicBool,
    failing_ops: Mutex<Vec<&'static str>>,
    op_calls: Mutex<Vec<&'static str>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_people(people: Vec<Person>) -> Self {
        RecordingStore {
            inner: MemoryPersonStore::with_people(people).unwrap(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }

    /// `(records, batch_size)` of every `create_batch` call.
    pub fn batch_sizes(&self) -> Vec<(usize, usize)> {
        self.batch_sizes.lock().unwrap().clone()
    }

    /// Records currently held, without counting as a call.
    pub async fn stored(&self) -> i64 {
        self.inner.count().await.unwrap()
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Fail only `op` (a `PersonStore` method name, e.g. `"replace"`).
    pub fn fail_on(&self, op: &'static str) {
        self.failing_ops.lock().unwrap().push(op);
    }

    /// Names of the store methods called so far, in order.
    pub fn ops(&self) -> Vec<&'static str> {
        self.op_calls.lock().unwrap().clone()
    }

    fn enter(&self, op: &'static str) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.op_calls.lock().unwrap().push(op);
        if self.failing.load(Ordering::SeqCst) || self.failing_ops.lock().unwrap().contains(&op) {
            return Err(StoreError::Backend("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PersonStore for RecordingStore {
    async fn find_all(&self) -> Result<Vec<Person>, StoreError> {
        self.enter("find_all")?;
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Person, StoreError> {
        self.enter("find_by_id")?;
        self.inner.find_by_id(id).await
    }

    async fn create(&self, person: Person) -> Result<Person, StoreError> {
        self.enter("create")?;
        self.inner.create(person).await
    }

    async fn replace(&self, id: Uuid, person: Person) -> Result<Person, StoreError> {
        self.enter("replace")?;
        self.inner.replace(id, person).await
    }

    async fn merge_update(&self, id: Uuid, patch: &Person) -> Result<u64, StoreError> {
        self.enter("merge_update")?;
        self.inner.merge_update(id, patch).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.enter("delete")?;
        self.inner.delete(id).await
    }

    async fn count(&self) -> Result<i64, StoreError> {
        self.enter("count")?;
        self.inner.count().await
    }

    async fn create_batch(&self, people: &[Person], batch_size: usize) -> Result<(), StoreError> {
        self.enter("create_batch")?;
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        self.batch_sizes.lock().unwrap().push((people.len(), batch_size));
        self.inner.create_batch(people, batch_size).await
    }
}

pub fn app(store: Arc<RecordingStore>) -> Router {
    let service = PersonService::new(store, tracing::Span::none());
    build_router(AppState::new(service))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

/// Send a request and return `(status, parsed body)`; empty bodies parse as `Null`.
pub async fn call(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let response = send(app, method, uri, body).await;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
