//! GraphQL introspection schema model for gqlmodel.
//!
//! The generator only needs a [`Schema`] value; this crate provides the
//! serde model plus two ways of obtaining one:
//!
//! ```no_run
//! use gqlmodel_schema::{load_schema_file, IntrospectionClient};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // From a live endpoint
//! let schema = IntrospectionClient::new()
//!     .fetch_schema("http://localhost:8081/udp/content")
//!     .await?;
//!
//! // From a saved introspection result
//! let saved = load_schema_file(Path::new("schema.json"))?;
//! assert_eq!(schema.types.len(), saved.types.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod load;
mod query;
mod types;

pub use client::{IntrospectionClient, DEFAULT_TIMEOUT_SECS};
pub use error::{IntrospectionError, Result};
pub use load::{load_schema_file, parse_schema};
pub use query::INTROSPECTION_QUERY;
pub use types::*;
