//! Shared application state for all routes.

use std::sync::Arc;

use crate::service::PersonService;

#[derive(Clone)]
pub struct AppState {
    pub people: Arc<PersonService>,
}

impl AppState {
    pub fn new(people: PersonService) -> Self {
        AppState {
            people: Arc::new(people),
        }
    }
}
