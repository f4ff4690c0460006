//! Person HTTP handlers: extract, call [`crate::service::PersonService`], pick the status.

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::error::AppError;
use crate::extractors::{Payload, PersonId};
use crate::model::Person;
use crate::response::{created, ok};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let people = state.people.list().await?;
    Ok(ok(people))
}

pub async fn create(
    State(state): State<AppState>,
    Payload(person): Payload<Person>,
) -> Result<impl IntoResponse, AppError> {
    let person = state.people.create(person).await?;
    Ok(created(person))
}

pub async fn read(
    State(state): State<AppState>,
    PersonId(id): PersonId,
) -> Result<impl IntoResponse, AppError> {
    let person = state.people.read(id).await?;
    Ok(ok(person))
}

pub async fn replace(
    State(state): State<AppState>,
    PersonId(id): PersonId,
    Payload(person): Payload<Person>,
) -> Result<impl IntoResponse, AppError> {
    let person = state.people.replace(id, person).await?;
    Ok(ok(person))
}

pub async fn merge(
    State(state): State<AppState>,
    PersonId(id): PersonId,
    Payload(patch): Payload<Person>,
) -> Result<impl IntoResponse, AppError> {
    let person = state.people.merge(id, patch).await?;
    Ok(ok(person))
}

pub async fn delete(
    State(state): State<AppState>,
    PersonId(id): PersonId,
) -> Result<impl IntoResponse, AppError> {
    state.people.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
