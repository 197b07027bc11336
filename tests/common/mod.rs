//! Common test fixtures: canned Jolokia payloads and config builders.

#![allow(dead_code)]

use amqmon::core::MonitorConfig;
use wiremock::MockServer;

/// Builds a config pointed at a mock server.
pub fn config_for(server: &MockServer, filter: &str, username: &str, password: &str) -> MonitorConfig {
    let addr = server.address();
    MonitorConfig::from_args(
        &addr.ip().to_string(),
        &addr.port().to_string(),
        "localhost",
        filter,
        username,
        password,
    )
    .expect("valid test config")
}

/// Jolokia read path for the test broker.
pub fn broker_path() -> String {
    "/api/jolokia/read/org.apache.activemq:type=Broker,brokerName=localhost".to_string()
}

/// Full management object name for a destination.
pub fn object_name(kind: &str, name: &str) -> String {
    format!(
        "org.apache.activemq:type=Broker,brokerName=localhost,destinationType={},destinationName={},view=stats",
        kind, name
    )
}

/// Jolokia read path for a destination object.
pub fn destination_path(kind: &str, name: &str) -> String {
    format!("/api/jolokia/read/{}", object_name(kind, name))
}

/// Broker payload body with the given uptime and destination refs.
pub fn broker_body(uptime_millis: u64, queues: &[&str], topics: &[&str]) -> String {
    let refs = |names: &[&str], kind: &str| {
        let entries: Vec<String> = names
            .iter()
            .map(|n| format!(r#"{{"objectName":"{}"}}"#, object_name(kind, n)))
            .collect();
        format!("[{}]", entries.join(","))
    };
    format!(
        r#"{{"value":{{
            "UptimeMillis": {},
            "MemoryPercentUsage": 11,
            "StorePercentUsage": 22,
            "TempPercentUsage": 33,
            "TotalConnectionsCount": 40,
            "CurrentConnectionsCount": 4,
            "AverageMessageSize": 256,
            "TotalMessageCount": 12,
            "TotalDequeueCount": 34,
            "TotalEnqueueCount": 56,
            "TotalProducerCount": 2,
            "TotalConsumerCount": 3,
            "Queues": {},
            "Topics": {}
        }}}}"#,
        uptime_millis,
        refs(queues, "Queue"),
        refs(topics, "Topic")
    )
}

/// Destination payload body. `Name` intentionally echoes the given name.
pub fn destination_body(name: &str) -> String {
    format!(
        r#"{{"value":{{
            "Name": "{}",
            "MemoryPercentUsage": 1,
            "QueueSize": 2,
            "MaxEnqueueTime": 3,
            "AverageEnqueueTime": 4,
            "TotalBlockedTime": 5,
            "MinEnqueueTime": 6,
            "AverageBlockedTime": 7,
            "BlockedSends": 8,
            "AverageMessageSize": 9,
            "MaxMessageSize": 10,
            "EnqueueCount": 11,
            "ForwardCount": 12,
            "ExpiredCount": 13,
            "InFlightCount": 14,
            "DispatchCount": 15,
            "DequeueCount": 16,
            "ConsumerCount": 17,
            "ProducerCount": 18
        }}}}"#,
        name
    )
}

/// A metric-selection token enabling every catalog entry.
pub fn select_all() -> String {
    vec!["1"; 32].join(",")
}
