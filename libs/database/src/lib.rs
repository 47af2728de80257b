//! Database library providing the MongoDB connector and connection utilities.
//!
//! The client returned by [`mongodb::connect`] is a cheap clone over a shared
//! connection pool; services create it once at startup and pass it (or a
//! [`Database`](::mongodb::Database) handle) to their repositories.
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("store");
//! let collection = db.collection::<Document>("products");
//! ```

pub mod common;
pub mod mongodb;

pub use common::{RetryConfig, retry, retry_with_backoff};
