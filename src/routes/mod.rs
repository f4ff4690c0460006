//! Route tables and the assembled application router.

mod common;
mod person;

pub use common::common_routes;
pub use person::{person_routes, PERSON_BASE_PATH};

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    limit::RequestBodyLimitLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::response::ErrorBody;
use crate::state::AppState;

/// Largest accepted request body.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Operational routes plus the person resource, ready to serve.
pub fn build_router(state: AppState) -> Router {
    with_middleware(
        Router::new()
            .merge(common_routes(state.clone()))
            .merge(person_routes(state)),
    )
}

/// Request logging, panic recovery and the body limit. A panicking handler answers
/// `500 {"error": "internal server error"}` and the server keeps running.
fn with_middleware(router: Router) -> Router {
    router
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

fn panic_response(_: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "internal server error".into(),
        }),
    )
        .into_response()
}
