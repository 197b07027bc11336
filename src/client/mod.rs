//! Management client for the broker's Jolokia HTTP bridge.
//!
//! The [`ManagementApi`] trait is the seam between the traversal engine and
//! the network; [`JolokiaClient`] is the real implementation. Requests are
//! plain HTTP GETs with an optional basic-auth header. There is no request
//! timeout: the run is a one-shot batch and is only cancellable by killing
//! the process.

#![warn(missing_docs)]

use crate::core::{MonitorConfig, MonitorError, Result};
use async_trait::async_trait;

/// Literal the management layer embeds in a 200 body when the named object
/// does not exist. Checked before any JSON parsing.
const INSTANCE_NOT_FOUND: &str = "javax.management.InstanceNotFoundException";

/// Jolokia read path for the broker object itself.
pub fn broker_object_path(broker: &str) -> String {
    format!("/api/jolokia/read/org.apache.activemq:type=Broker,brokerName={}", broker)
}

/// Jolokia read path for an arbitrary management object.
pub fn object_path(object_name: &str) -> String {
    format!("/api/jolokia/read/{}", object_name)
}

/// Fetches a management object's raw JSON text.
#[async_trait]
pub trait ManagementApi {
    /// Performs one GET against the management API and returns the body.
    async fn fetch(&self, path: &str) -> Result<String>;
}

/// reqwest-backed [`ManagementApi`] implementation.
pub struct JolokiaClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl JolokiaClient {
    /// Creates a client for the configured host, port, and credentials.
    pub fn new(config: &MonitorConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| MonitorError::transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: format!("http://{}:{}", config.host, config.port),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

}

#[async_trait]
impl ManagementApi for JolokiaClient {
    async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "fetching management object");

        let mut request = self.http.get(&url);
        // The auth header is attached only when a username was supplied.
        if !self.username.is_empty() {
            request = request.basic_auth(&self.username, Some(&self.password));
        }

        let response = request.send().await.map_err(classify_send_error)?;
        match response.status().as_u16() {
            200 => {},
            401 => return Err(MonitorError::InvalidAuthentication),
            code => return Err(MonitorError::Http(code)),
        }

        let body = response
            .text()
            .await
            .map_err(|e| MonitorError::transport(e.to_string()))?;
        if body.contains(INSTANCE_NOT_FOUND) {
            return Err(MonitorError::UnknownBroker);
        }
        Ok(body)
    }
}

fn classify_send_error(err: reqwest::Error) -> MonitorError {
    // DNS failures and refused connections both surface as connect errors.
    if err.is_connect() {
        MonitorError::UnknownHost
    } else {
        MonitorError::transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broker_object_path() {
        assert_eq!(
            broker_object_path("localhost"),
            "/api/jolokia/read/org.apache.activemq:type=Broker,brokerName=localhost"
        );
    }

    #[test]
    fn test_object_path() {
        let name = "org.apache.activemq:type=Broker,brokerName=localhost,\
                    destinationType=Queue,destinationName=Orders";
        assert_eq!(object_path(name), format!("/api/jolokia/read/{}", name));
    }
}
