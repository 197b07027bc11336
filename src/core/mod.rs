//! Core domain models for amqmon.
//!
//! This module contains the error taxonomy, the runtime configuration
//! assembled from the command line, and the record types the rest of the
//! pipeline produces and consumes.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::MonitorConfig;
pub use error::{MonitorError, Result};
pub use types::{MetricRecord, MetricValue, Scope};
