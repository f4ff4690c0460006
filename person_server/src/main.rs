//! Person server: loads config, prepares the store, seeds if asked, then serves
//! `/v1/world/person/` until Ctrl-C.
//!
//! Run from repo root: `cargo run -p person-server`

use std::sync::Arc;

use person_service::{
    build_router, ensure_database_exists, ensure_person_table, load_from_env, telemetry, AppState,
    MemoryPersonStore, PersonService, PersonStore, PersonTable, PgPersonStore, RandomFakeData,
    SeedLoader, StoreBackend,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init().map_err(|e| e as Box<dyn std::error::Error>)?;

    let config = load_from_env()?;

    let store: Arc<dyn PersonStore> = match config.backend {
        StoreBackend::Postgres => {
            ensure_database_exists(&config.database).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect_with(config.database.connect_options())
                .await?;
            let table = PersonTable::new(config.database.schema.clone());
            ensure_person_table(&pool, &table).await?;
            Arc::new(PgPersonStore::new(pool, table))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            Arc::new(MemoryPersonStore::new())
        }
    };

    if config.seed.enabled {
        let loader = SeedLoader::new(store.clone(), telemetry::seed_span());
        let mut fake = RandomFakeData::from_entropy();
        // A failed seed aborts startup.
        let outcome = loader.load(config.seed.count as usize, &mut fake).await?;
        tracing::info!(?outcome, "seeding finished");
    }

    let state = AppState::new(PersonService::new(store, telemetry::service_span()));
    let app = build_router(state);

    let listener = TcpListener::bind(config.http.bind_address()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
