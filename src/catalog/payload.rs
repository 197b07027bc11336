//! Typed shapes of the Jolokia read responses.
//!
//! Jolokia wraps the managed object's attributes in a `value` envelope. The
//! fields below are the ones the catalog extracts; every one of them is
//! required, so a payload missing a field fails deserialization instead of
//! being silently coerced to a default. Unknown attributes are ignored.

use crate::core::{MonitorError, Result};
use serde::Deserialize;
use serde_json::Number;

/// Marker preceding the human-readable destination name inside a
/// management object name.
const DESTINATION_NAME_MARKER: &str = "destinationName=";

/// Management response for the broker object.
#[derive(Debug, Clone, Deserialize)]
pub struct BrokerPayload {
    /// Attribute envelope.
    pub value: BrokerValue,
}

/// Broker attributes the catalog reads.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BrokerValue {
    /// Broker uptime in milliseconds.
    pub uptime_millis: u64,
    /// Memory limit usage, percent.
    pub memory_percent_usage: Number,
    /// Store limit usage, percent.
    pub store_percent_usage: Number,
    /// Temp store limit usage, percent.
    pub temp_percent_usage: Number,
    /// Connections since broker start.
    pub total_connections_count: Number,
    /// Currently open connections.
    pub current_connections_count: Number,
    /// Average message size across the broker.
    pub average_message_size: Number,
    /// Messages currently held by the broker.
    pub total_message_count: Number,
    /// Messages dequeued since start.
    pub total_dequeue_count: Number,
    /// Messages enqueued since start.
    pub total_enqueue_count: Number,
    /// Producers attached to the broker.
    pub total_producer_count: Number,
    /// Consumers attached to the broker.
    pub total_consumer_count: Number,
    /// References to the broker's queue objects.
    pub queues: Vec<DestinationRef>,
    /// References to the broker's topic objects.
    pub topics: Vec<DestinationRef>,
}

/// Reference to one queue or topic management object.
#[derive(Debug, Clone, Deserialize)]
pub struct DestinationRef {
    /// Full management object name, e.g.
    /// `org.apache.activemq:type=Broker,brokerName=localhost,destinationType=Queue,destinationName=Orders,...`.
    #[serde(rename = "objectName")]
    pub object_name: String,
}

impl DestinationRef {
    /// Derives the human-readable destination name: the substring after the
    /// `destinationName=` marker up to the next comma.
    pub fn destination_name(&self) -> Result<&str> {
        let start = self
            .object_name
            .find(DESTINATION_NAME_MARKER)
            .ok_or_else(|| {
                MonitorError::parse(format!("no destination name in {:?}", self.object_name))
            })?;
        let rest = &self.object_name[start + DESTINATION_NAME_MARKER.len()..];
        let end = rest.find(',').ok_or_else(|| {
            MonitorError::parse(format!("unterminated destination name in {:?}", self.object_name))
        })?;
        Ok(&rest[..end])
    }
}

/// Management response for one queue/topic object.
#[derive(Debug, Clone, Deserialize)]
pub struct DestinationPayload {
    /// Attribute envelope.
    pub value: DestinationValue,
}

/// Per-destination attributes the catalog reads.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DestinationValue {
    /// Destination name as reported by the managed object itself.
    pub name: String,
    /// Memory limit usage, percent.
    pub memory_percent_usage: Number,
    /// Messages currently on the queue.
    pub queue_size: Number,
    /// Longest enqueue time, milliseconds.
    pub max_enqueue_time: Number,
    /// Average enqueue time, milliseconds.
    pub average_enqueue_time: Number,
    /// Total producer-blocked time, milliseconds.
    pub total_blocked_time: Number,
    /// Shortest enqueue time, milliseconds.
    pub min_enqueue_time: Number,
    /// Average producer-blocked time, milliseconds.
    pub average_blocked_time: Number,
    /// Sends that blocked on flow control.
    pub blocked_sends: Number,
    /// Average message size on this destination.
    pub average_message_size: Number,
    /// Largest message seen on this destination.
    pub max_message_size: Number,
    /// Messages enqueued since start.
    pub enqueue_count: Number,
    /// Messages forwarded to networked brokers.
    pub forward_count: Number,
    /// Messages expired before delivery.
    pub expired_count: Number,
    /// Messages dispatched but not yet acknowledged.
    pub in_flight_count: Number,
    /// Messages dispatched to consumers since start.
    pub dispatch_count: Number,
    /// Messages dequeued since start.
    pub dequeue_count: Number,
    /// Consumers subscribed to this destination.
    pub consumer_count: Number,
    /// Producers attached to this destination.
    pub producer_count: Number,
}
