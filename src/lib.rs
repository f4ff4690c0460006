//! Person service: REST resource for Person records over a pluggable store, with
//! optional synthetic seeding at startup.

pub mod case;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::{from_lookup, load_from_env, AppConfig, StoreBackend};
pub use error::{AppError, ConfigError, SeedError, StoreError};
pub use migration::{ensure_database_exists, ensure_person_table};
pub use model::Person;
pub use routes::{build_router, PERSON_BASE_PATH};
pub use seed::{RandomFakeData, SeedLoader, SeedOutcome};
pub use service::PersonService;
pub use sql::PersonTable;
pub use state::AppState;
pub use store::{MemoryPersonStore, PersonStore, PgPersonStore};
