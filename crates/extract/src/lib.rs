//! Driver-bridge SQL extraction step.
//!
//! Connects to a relational source through the [`siphon_core`] driver
//! interface, loads a SQL statement verbatim from a file, executes it
//! once, and returns column headers plus fully materialized rows.
//!
//! This is a linear, single-attempt step intended for a larger pipeline:
//! no pooling, no retries, no streaming. The connection opened for an
//! extraction is released on every exit path.

pub mod config;
pub mod error;
pub mod executor;
pub mod extract;
pub mod query;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::{JobConfig, SourceConfig, REQUIRED_SOURCE_KEYS};
pub use error::ExtractError;
pub use executor::query_db;
pub use extract::{connect_to_source, extract_data};
pub use query::load_query;
