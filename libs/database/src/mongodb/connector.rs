use mongodb::{Client, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Error type for MongoDB connection operations
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Open a verified connection using a bare URL and default tunables.
///
/// # Example
/// ```ignore
/// use database::mongodb::connect;
///
/// let client = connect("mongodb://localhost:27017").await?;
/// let db = client.database("store");
/// ```
pub async fn connect(url: &str) -> Result<Client, MongoError> {
    connect_from_config(&MongoConfig::new(url)).await
}

/// Open a verified connection using a [`MongoConfig`].
///
/// Pool sizes and timeouts from the config are applied on top of whatever the
/// connection string specifies. The client is returned only after a round
/// trip to the server succeeds, so `Ok` means the store is actually
/// reachable, not just that the URL parsed.
///
/// # Example
/// ```ignore
/// use core_config::FromEnv;
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let client = connect_from_config(&MongoConfig::from_env()?).await?;
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!(url = %config.url, "Connecting to MongoDB");

    let options = client_options(config).await?;
    let client = Client::with_options(options)?;

    verify_connection(&client).await?;

    info!("MongoDB connection established");
    Ok(client)
}

/// Like [`connect`], retrying transient failures with exponential backoff.
pub async fn connect_with_retry(
    url: &str,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    connect_from_config_with_retry(&MongoConfig::new(url), retry_config).await
}

/// Like [`connect_from_config`], retrying transient failures.
///
/// With `None` the default retry policy applies (3 attempts, exponential
/// backoff with jitter). Startup code paths use this so a service racing its
/// database container does not die on the first refused connection.
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    match retry_config {
        Some(policy) => retry_with_backoff(|| connect_from_config(config), policy).await,
        None => retry(|| connect_from_config(config)).await,
    }
}

async fn client_options(config: &MongoConfig) -> Result<ClientOptions, MongoError> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));
    options.app_name = config.app_name.clone().or(options.app_name);

    Ok(options)
}

async fn verify_connection(client: &Client) -> Result<(), MongoError> {
    client
        .list_database_names()
        .await
        .map(|_| ())
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))
}
