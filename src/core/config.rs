//! Runtime configuration for one collection pass.
//!
//! The configuration is assembled once from the positional command-line
//! arguments and never changes for the lifetime of the process. All the
//! argument-normalization quirks of the calling pipeline live here:
//! quote-wrapped empty credentials, the `{0}` placeholder, and the empty
//! admin-port default.

use crate::core::{MonitorError, Result};

/// Default ActiveMQ web console / Jolokia port.
pub const DEFAULT_ADMIN_PORT: u16 = 8161;

/// Settings for one collection run.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Broker hostname or IP address.
    pub host: String,
    /// Admin (Jolokia) port.
    pub port: u16,
    /// Broker name as registered in the management tree.
    pub broker: String,
    /// Raw destination-name filter entries (may be empty).
    pub filter: Vec<String>,
    /// Basic-auth username; empty means no auth header.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
}

impl MonitorConfig {
    /// Builds a configuration from the raw positional arguments.
    ///
    /// An empty port string falls back to [`DEFAULT_ADMIN_PORT`]; anything
    /// else must parse as a port number. A username of `{0}` is an
    /// unexpanded placeholder from the calling system and clears both
    /// credentials.
    pub fn from_args(
        host: &str,
        port: &str,
        broker: &str,
        filter: &str,
        username: &str,
        password: &str,
    ) -> Result<Self> {
        let port = if port.is_empty() {
            DEFAULT_ADMIN_PORT
        } else {
            port.parse::<u16>()
                .map_err(|_| MonitorError::config(format!("invalid admin port: {:?}", port)))?
        };

        let mut username = normalize_credential(username);
        let mut password = normalize_credential(password);
        if username == "{0}" {
            username = String::new();
            password = String::new();
        }

        let filter = strip_quotes(filter);
        let filter = if filter.is_empty() {
            Vec::new()
        } else {
            filter.split(';').map(str::to_owned).collect()
        };

        Ok(Self {
            host: host.to_owned(),
            port,
            broker: broker.to_owned(),
            filter,
            username,
            password,
        })
    }
}

/// Removes all double quotes from an argument value.
///
/// The calling pipeline wraps some arguments in literal quotes.
pub fn strip_quotes(value: &str) -> String {
    value.replace('"', "")
}

/// Normalizes a credential argument: empty, `""`, and a lone `"` all mean
/// "not supplied".
fn normalize_credential(value: &str) -> String {
    match value {
        "" | "\"\"" | "\"" => String::new(),
        other => other.to_owned(),
    }
}
