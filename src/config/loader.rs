//! Load [`AppConfig`] from the environment, optionally primed from an env file.

use std::path::Path;
use std::str::FromStr;

use crate::config::types::*;
use crate::error::ConfigError;

/// Env file read before the process environment when `CONFIG_ENV_FILE` is unset.
pub const DEFAULT_ENV_FILE: &str = "config/env/app.env";

/// Load the env file (if present) into the process environment, then resolve config.
/// Variables already set in the environment win over the file.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    let env_file = std::env::var("CONFIG_ENV_FILE").unwrap_or_else(|_| DEFAULT_ENV_FILE.into());
    if Path::new(&env_file).exists() {
        dotenvy::from_path(&env_file).map_err(|e| ConfigError::Load(e.to_string()))?;
    }
    dotenvy::dotenv().ok();
    from_lookup(|key| std::env::var(key).ok())
}

/// Resolve config through an arbitrary key lookup. Missing keys take their defaults.
pub fn from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

    let database = DatabaseConfig {
        host: string("DATABASE_HOST", "localhost"),
        port: parsed(&lookup, "DATABASE_PORT", 5432)?,
        name: string("DATABASE_NAME", "person_service"),
        user: string("DATABASE_USER", "postgres"),
        password: string("DATABASE_PASSWORD", ""),
        schema: string("DATABASE_SCHEMA", "public"),
        max_connections: parsed(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
    };
    let http = HttpConfig {
        host: string("HTTP_HOST", "0.0.0.0"),
        port: parsed(&lookup, "HTTP_PORT", 8080)?,
    };
    let seed = SeedConfig {
        enabled: parse_bool(&lookup, "SHOULD_SEED_DATA", false)?,
        count: parsed(&lookup, "NUMBER_OF_TEST_PERSON_ENTRIES", 0)?,
    };
    let backend = match lookup("STORE_BACKEND") {
        Some(raw) => raw.parse()?,
        None => StoreBackend::Postgres,
    };

    Ok(AppConfig {
        database,
        http,
        seed,
        backend,
    })
}

fn parsed<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

fn parse_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "t" | "yes" | "on" => Ok(true),
            "0" | "false" | "f" | "no" | "off" | "" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value: raw }),
        },
    }
}
