//! Person resource routes under `/v1/world/person/`.
//! Registered with and without the trailing slash so both spellings reach the collection.

use axum::{routing::get, Router};

use crate::handlers::person::{create, delete, list, merge, read, replace};
use crate::state::AppState;

pub const PERSON_BASE_PATH: &str = "/v1/world/person";

pub fn person_routes(state: AppState) -> Router {
    let collection = get(list).post(create);
    Router::new()
        .route(PERSON_BASE_PATH, collection.clone())
        .route(&format!("{}/", PERSON_BASE_PATH), collection)
        .route(
            &format!("{}/:id", PERSON_BASE_PATH),
            get(read).put(replace).patch(merge).delete(delete),
        )
        .with_state(state)
}
