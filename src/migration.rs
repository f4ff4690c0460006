//! Database bootstrap: create the database and the `people` table when missing.

use sqlx::ConnectOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::error::AppError;
use crate::sql::PersonTable;

/// Ensure the configured database exists; create it if not. Connects to the
/// `postgres` maintenance database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(config: &DatabaseConfig) -> Result<(), AppError> {
    if config.name.is_empty() || config.name == "postgres" {
        return Ok(());
    }
    let mut conn: sqlx::PgConnection = config.admin_connect_options().connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&config.name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %config.name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&config.name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Create the schema and `people` table if they do not exist. Idempotent.
pub async fn ensure_person_table(pool: &PgPool, table: &PersonTable) -> Result<(), AppError> {
    sqlx::query(&table.create_schema()).execute(pool).await?;
    sqlx::query(&table.create_table()).execute(pool).await?;
    tracing::info!(table = %table.qualified(), "person table ready");
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
