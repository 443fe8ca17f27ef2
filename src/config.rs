//! Application-level configuration resolved from the process environment.

use std::env;

use tracing::warn;

/// Connection string used when `DATABASE_URL` is not set.
const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";
/// Port the listener binds when `PORT` is not set.
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// MongoDB connection string (`DATABASE_URL`).
    pub database_url: String,
    /// Database name override (`DATABASE_NAME`); when unset the database named
    /// in the connection string is used.
    pub database_name: Option<String>,
    /// TCP port the HTTP listener binds (`PORT`).
    pub port: u16,
}

impl AppConfig {
    /// Read the configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());
        let database_name = env::var("DATABASE_NAME").ok().filter(|name| !name.is_empty());
        let port = parse_port(env::var("PORT").ok());

        Self {
            database_url,
            database_name,
            port,
        }
    }
}

/// Parse the `PORT` value, logging and falling back when it is not a port number.
fn parse_port(raw: Option<String>) -> u16 {
    match raw {
        Some(value) => value.parse().unwrap_or_else(|_| {
            warn!(%value, "PORT is not a valid port number; using default");
            DEFAULT_PORT
        }),
        None => DEFAULT_PORT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_valid() {
        assert_eq!(parse_port(Some("8080".to_owned())), 8080);
    }

    #[test]
    fn test_parse_port_missing_uses_default() {
        assert_eq!(parse_port(None), DEFAULT_PORT);
    }

    #[test]
    fn test_parse_port_garbage_uses_default() {
        assert_eq!(parse_port(Some("not-a-port".to_owned())), DEFAULT_PORT);
        assert_eq!(parse_port(Some("70000".to_owned())), DEFAULT_PORT);
    }
}
