//! Resolved process configuration. Loaded once at startup and passed down by value.

use sqlx::postgres::PgConnectOptions;
use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    /// Schema holding the `people` table.
    pub schema: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        let opts = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);
        if self.password.is_empty() {
            opts
        } else {
            opts.password(&self.password)
        }
    }

    /// Options for the maintenance database, used to create `name` when it is missing.
    pub fn admin_connect_options(&self) -> PgConnectOptions {
        self.connect_options().database("postgres")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl HttpConfig {
    /// `host:port`, suitable for `TcpListener::bind` (hostnames are resolved there).
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedConfig {
    pub enabled: bool,
    pub count: u32,
}

/// Which [`crate::store::PersonStore`] the server runs against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(ConfigError::Invalid {
                key: "STORE_BACKEND",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub http: HttpConfig,
    pub seed: SeedConfig,
    pub backend: StoreBackend,
}
