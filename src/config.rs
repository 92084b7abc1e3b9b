use std::env;

use tracing::warn;

const DEFAULT_DATABASE_URL: &str = "sqlite://social_media.db?mode=rwc";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
}

impl Config {
    /// Reads settings from the environment, loading `.env` first when present.
    pub fn init() -> Config {
        dotenv::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let port = parse_or("PORT", DEFAULT_PORT);
        let max_connections = parse_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS);

        Config {
            database_url,
            port,
            max_connections,
        }
    }
}

fn parse_or<T: std::str::FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{key}={raw:?} is not valid, using {default}");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_uses_default() {
        assert_eq!(parse_or("SOCIAL_MEDIA_API_UNSET_FOR_TEST", 42u16), 42);
    }

    #[test]
    fn invalid_variable_uses_default() {
        env::set_var("SOCIAL_MEDIA_API_BAD_PORT_FOR_TEST", "not-a-port");
        assert_eq!(parse_or("SOCIAL_MEDIA_API_BAD_PORT_FOR_TEST", 8080u16), 8080);
    }
}
