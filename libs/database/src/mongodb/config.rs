use core_config::{ConfigError, FromEnv, env_or_default};

/// Connection settings for the MongoDB client.
///
/// Built manually or from the environment:
///
/// ```ignore
/// use core_config::FromEnv;
/// use database::mongodb::MongoConfig;
///
/// let manual = MongoConfig::with_database("mongodb://localhost:27017", "store");
/// let from_env = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string, `mongodb://[user:pass@]host[:port][/db][?options]`
    pub url: String,

    /// Name of the database holding the service's collections
    pub database: String,

    /// Optional application name reported to the server
    pub app_name: Option<String>,

    /// Connection pool upper bound
    pub max_pool_size: u32,

    /// Connections kept warm in the pool
    pub min_pool_size: u32,

    /// TCP connect timeout, seconds
    pub connect_timeout_secs: u64,

    /// Server selection timeout, seconds
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// Config over `url` with the default `store` database and pool tunables.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_database(url, "store")
    }

    /// Config over `url` targeting a specific database.
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::new("mongodb://localhost:27017")
    }
}

/// Environment variables read by [`MongoConfig::from_env`]:
///
/// - `MONGODB_URL` or `MONGO_URL` (required) - connection string
/// - `MONGODB_DATABASE` (default `store`)
/// - `MONGODB_APP_NAME` (optional)
/// - `MONGODB_MAX_POOL_SIZE` (default 100)
/// - `MONGODB_MIN_POOL_SIZE` (default 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default 30)
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        // MONGO_URL is the variable the original deployment used.
        let url = std::env::var("MONGODB_URL")
            .or_else(|_| std::env::var("MONGO_URL"))
            .map_err(|_| ConfigError::MissingEnvVar("MONGODB_URL or MONGO_URL".to_string()))?;

        Ok(Self {
            url,
            database: env_or_default("MONGODB_DATABASE", "store"),
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: parse_env("MONGODB_MAX_POOL_SIZE", "100")?,
            min_pool_size: parse_env("MONGODB_MIN_POOL_SIZE", "5")?,
            connect_timeout_secs: parse_env("MONGODB_CONNECT_TIMEOUT_SECS", "10")?,
            server_selection_timeout_secs: parse_env(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                "30",
            )?,
        })
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    env_or_default(key, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_database_sets_fields() {
        let config = MongoConfig::with_database("mongodb://localhost:27017", "store");
        assert_eq!(config.url(), "mongodb://localhost:27017");
        assert_eq!(config.database(), "store");
        assert_eq!(config.max_pool_size, 100);
    }

    #[test]
    fn from_env_reads_url_and_database() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("testdb")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://localhost:27017");
                assert_eq!(config.database, "testdb");
            },
        );
    }

    #[test]
    fn from_env_accepts_mongo_url_fallback() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", Some("mongodb://fallback:27017")),
                ("MONGODB_DATABASE", None::<&str>),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://fallback:27017");
                assert_eq!(config.database, "store");
            },
        );
    }

    #[test]
    fn from_env_requires_connection_string() {
        temp_env::with_vars(
            [("MONGODB_URL", None::<&str>), ("MONGO_URL", None::<&str>)],
            || {
                assert!(MongoConfig::from_env().is_err());
            },
        );
    }

    #[test]
    fn from_env_rejects_invalid_pool_size() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_MAX_POOL_SIZE", Some("many")),
            ],
            || {
                assert!(MongoConfig::from_env().is_err());
            },
        );
    }
}
