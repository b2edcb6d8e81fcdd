use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {0} value")]
    Invalid(&'static str),
}

#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 50,
            min_connections: 10,
            connect_timeout: Duration::from_secs(5),
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub pool: PoolSettings,
    /// Directory image files are written under.
    pub media_root: String,
    /// Prefix joined with a storage key to build the public image URL.
    pub media_base_url: String,
}

impl AppConfig {
    /// Reads `HOST`, `PORT`, `DATABASE_URL`, `DB_MAX_CONNECTIONS`, `DB_MIN_CONNECTIONS`,
    /// `MEDIA_ROOT` and `MEDIA_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = get("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or(&get, "PORT", 8000)?;

        let defaults = PoolSettings::default();
        let pool = PoolSettings {
            max_connections: parse_or(&get, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            min_connections: parse_or(&get, "DB_MIN_CONNECTIONS", defaults.min_connections)?,
            ..defaults
        };

        if pool.min_connections > pool.max_connections {
            return Err(ConfigError::Invalid("DB_MIN_CONNECTIONS"));
        }

        Ok(Self {
            host,
            port,
            database_url,
            pool,
            media_root: get("MEDIA_ROOT").unwrap_or_else(|| "media".to_string()),
            media_base_url: get("MEDIA_BASE_URL").unwrap_or_else(|| "/media".to_string()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match get(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}
