//! amqmon - one-shot ActiveMQ performance collector.
//!
//! amqmon polls an ActiveMQ broker's Jolokia management API once, extracts
//! a configurable set of numeric metrics for the broker and for each
//! matching queue/topic, and prints them as flat pipe-delimited lines for
//! an external monitoring pipeline. One process lifetime is exactly one
//! measurement pass: there is no daemon mode, no retrying, and no partial
//! output - the first error aborts the run.
//!
//! # Architecture
//!
//! - `catalog`: the fixed, ordered metric table and payload shapes
//! - `filter`: case-insensitive substring filtering of destination names
//! - `client`: the Jolokia HTTP client behind the `ManagementApi` seam
//! - `collector`: the sequential broker-then-destinations traversal
//! - `export`: pipe-delimited line rendering
//! - `cli`: argument surface and top-level execution
//!
//! # Example
//!
//! ```no_run
//! use amqmon::catalog::Selection;
//! use amqmon::client::JolokiaClient;
//! use amqmon::collector::Collector;
//! use amqmon::core::MonitorConfig;
//! use amqmon::filter::NameFilter;
//!
//! #[tokio::main]
//! async fn main() -> amqmon::Result<()> {
//!     let config = MonitorConfig::from_args("10.0.0.5", "8161", "localhost", "", "", "")?;
//!     let selection = Selection::all();
//!     let filter = NameFilter::new(&config.filter);
//!     let client = JolokiaClient::new(&config)?;
//!     let records = Collector::new(&client, &selection, &filter, &config.broker)
//!         .collect()
//!         .await?;
//!     println!("{} records", records.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod catalog;
pub mod cli;
pub mod client;
pub mod collector;
pub mod core;
pub mod export;
pub mod filter;

// Re-export core types for convenience
pub use crate::core::{MonitorConfig, MonitorError, Result};
