//! The metric catalog: every metric this collector knows how to extract.
//!
//! The catalog is a fixed, ordered table. Order matters twice: the
//! positional metric-selection token from the command line is matched
//! against it index by index, and records are emitted in catalog order.
//! Entries are immutable; which ones are enabled for a run lives in a
//! separately owned [`Selection`], never on the entries themselves.

#![warn(missing_docs)]

pub mod payload;

use crate::core::{MetricValue, MonitorError, Result, Scope};
use serde_json::Number;

pub use payload::{BrokerPayload, BrokerValue, DestinationPayload, DestinationRef, DestinationValue};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Broker-scope extractors, one per broker metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrokerStat {
    /// `UptimeMillis` rendered as hours with two decimals.
    UptimeHours,
    /// `MemoryPercentUsage`.
    MemoryPercentUsage,
    /// `StorePercentUsage`.
    StorePercentUsage,
    /// `TempPercentUsage`.
    TempPercentUsage,
    /// `TotalConnectionsCount`.
    TotalConnectionsCount,
    /// `CurrentConnectionsCount`.
    CurrentConnectionsCount,
    /// `AverageMessageSize`.
    AverageMessageSize,
    /// `TotalMessageCount`.
    TotalMessageCount,
    /// `TotalDequeueCount`.
    TotalDequeueCount,
    /// `TotalEnqueueCount`.
    TotalEnqueueCount,
    /// `TotalProducerCount`.
    TotalProducerCount,
    /// `TotalConsumerCount`.
    TotalConsumerCount,
    /// Number of queue references in the broker payload.
    QueueCount,
    /// Number of topic references in the broker payload.
    TopicCount,
}

impl BrokerStat {
    /// Reads this statistic out of a broker payload.
    pub fn read(&self, value: &BrokerValue) -> MetricValue {
        match self {
            Self::UptimeHours => MetricValue::Hours(value.uptime_millis as f64 / MILLIS_PER_HOUR),
            Self::MemoryPercentUsage => MetricValue::Number(value.memory_percent_usage.clone()),
            Self::StorePercentUsage => MetricValue::Number(value.store_percent_usage.clone()),
            Self::TempPercentUsage => MetricValue::Number(value.temp_percent_usage.clone()),
            Self::TotalConnectionsCount => {
                MetricValue::Number(value.total_connections_count.clone())
            },
            Self::CurrentConnectionsCount => {
                MetricValue::Number(value.current_connections_count.clone())
            },
            Self::AverageMessageSize => MetricValue::Number(value.average_message_size.clone()),
            Self::TotalMessageCount => MetricValue::Number(value.total_message_count.clone()),
            Self::TotalDequeueCount => MetricValue::Number(value.total_dequeue_count.clone()),
            Self::TotalEnqueueCount => MetricValue::Number(value.total_enqueue_count.clone()),
            Self::TotalProducerCount => MetricValue::Number(value.total_producer_count.clone()),
            Self::TotalConsumerCount => MetricValue::Number(value.total_consumer_count.clone()),
            Self::QueueCount => MetricValue::Number(Number::from(value.queues.len())),
            Self::TopicCount => MetricValue::Number(Number::from(value.topics.len())),
        }
    }
}

/// Destination-scope extractors, one per queue/topic metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationStat {
    /// `MemoryPercentUsage`.
    MemoryPercentUsage,
    /// `QueueSize`.
    QueueSize,
    /// `MaxEnqueueTime`.
    MaxEnqueueTime,
    /// `AverageEnqueueTime`.
    AverageEnqueueTime,
    /// `TotalBlockedTime`.
    TotalBlockedTime,
    /// `MinEnqueueTime`.
    MinEnqueueTime,
    /// `AverageBlockedTime`.
    AverageBlockedTime,
    /// `BlockedSends`.
    BlockedSends,
    /// `AverageMessageSize`.
    AverageMessageSize,
    /// `MaxMessageSize`.
    MaxMessageSize,
    /// `EnqueueCount`.
    EnqueueCount,
    /// `ForwardCount`.
    ForwardCount,
    /// `ExpiredCount`.
    ExpiredCount,
    /// `InFlightCount`.
    InFlightCount,
    /// `DispatchCount`.
    DispatchCount,
    /// `DequeueCount`.
    DequeueCount,
    /// `ConsumerCount`.
    ConsumerCount,
    /// `ProducerCount`.
    ProducerCount,
}

impl DestinationStat {
    /// Reads this statistic out of a destination payload.
    pub fn read(&self, value: &DestinationValue) -> MetricValue {
        let n = match self {
            Self::MemoryPercentUsage => &value.memory_percent_usage,
            Self::QueueSize => &value.queue_size,
            Self::MaxEnqueueTime => &value.max_enqueue_time,
            Self::AverageEnqueueTime => &value.average_enqueue_time,
            Self::TotalBlockedTime => &value.total_blocked_time,
            Self::MinEnqueueTime => &value.min_enqueue_time,
            Self::AverageBlockedTime => &value.average_blocked_time,
            Self::BlockedSends => &value.blocked_sends,
            Self::AverageMessageSize => &value.average_message_size,
            Self::MaxMessageSize => &value.max_message_size,
            Self::EnqueueCount => &value.enqueue_count,
            Self::ForwardCount => &value.forward_count,
            Self::ExpiredCount => &value.expired_count,
            Self::InFlightCount => &value.in_flight_count,
            Self::DispatchCount => &value.dispatch_count,
            Self::DequeueCount => &value.dequeue_count,
            Self::ConsumerCount => &value.consumer_count,
            Self::ProducerCount => &value.producer_count,
        };
        MetricValue::Number(n.clone())
    }
}

/// How a metric is extracted; the variant also fixes its scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    /// Extracted from the broker payload.
    Broker(BrokerStat),
    /// Extracted from a queue/topic payload.
    Destination(DestinationStat),
}

impl Extractor {
    /// The scope this extractor applies to.
    pub fn scope(&self) -> Scope {
        match self {
            Self::Broker(_) => Scope::Broker,
            Self::Destination(_) => Scope::Destination,
        }
    }
}

/// One catalog entry: an opaque external metric code and its extractor.
#[derive(Debug, Clone, Copy)]
pub struct MetricDefinition {
    /// Opaque metric code consumed by the monitoring pipeline.
    pub id: &'static str,
    /// Extraction case for this metric.
    pub extractor: Extractor,
}

macro_rules! broker {
    ($id:literal, $stat:ident) => {
        MetricDefinition {
            id: $id,
            extractor: Extractor::Broker(BrokerStat::$stat),
        }
    };
}

macro_rules! destination {
    ($id:literal, $stat:ident) => {
        MetricDefinition {
            id: $id,
            extractor: Extractor::Destination(DestinationStat::$stat),
        }
    };
}

/// The full catalog, broker block first, then the destination block. The
/// order is part of the external contract (positional selection and output
/// order) and is never re-sorted.
const CATALOG: &[MetricDefinition] = &[
    broker!("1769:Uptime:4", UptimeHours),
    broker!("1770:Memory Usage:6", MemoryPercentUsage),
    broker!("1771:Store Usage:6", StorePercentUsage),
    broker!("1772:Temp Usage:6", TempPercentUsage),
    broker!("1773:Total Connections:4", TotalConnectionsCount),
    broker!("1774:Current Connections:4", CurrentConnectionsCount),
    broker!("1775:Average Message Size:4", AverageMessageSize),
    broker!("1776:Total Messages:4", TotalMessageCount),
    broker!("1777:Dequeue Messages:4", TotalDequeueCount),
    broker!("1778:Enqueue Messages:4", TotalEnqueueCount),
    broker!("1779:Total Producers:4", TotalProducerCount),
    broker!("1780:Total Consumers:4", TotalConsumerCount),
    broker!("1781:Total Queues:4", QueueCount),
    broker!("1782:Total Topics:4", TopicCount),
    destination!("1783:Memory Usage:6", MemoryPercentUsage),
    destination!("1784:Queue Size:4", QueueSize),
    destination!("1785:Max Enqueue Time:4", MaxEnqueueTime),
    destination!("1786:Average Enqueue Time:4", AverageEnqueueTime),
    destination!("1787:Total Blocked Time:4", TotalBlockedTime),
    destination!("1788:Min Enqueue Time:4", MinEnqueueTime),
    destination!("1789:Average Blocked Time:4", AverageBlockedTime),
    destination!("1790:Blocked Sends:4", BlockedSends),
    destination!("1791:Average Message Size:4", AverageMessageSize),
    destination!("1792:Max Message Size:4", MaxMessageSize),
    destination!("1793:Enqueue Messages:4", EnqueueCount),
    destination!("1794:Forward Messages:4", ForwardCount),
    destination!("1795:Expired Messages:4", ExpiredCount),
    destination!("1796:In Flight Messages:4", InFlightCount),
    destination!("1797:Dispatch Messages:4", DispatchCount),
    destination!("1798:Dequeue Messages:4", DequeueCount),
    destination!("1799:Total Consumers:4", ConsumerCount),
    destination!("1800:Total Producers:4", ProducerCount),
];

/// Returns the fixed, ordered metric catalog.
pub fn definitions() -> &'static [MetricDefinition] {
    CATALOG
}

/// Which catalog entries are enabled for this run, positionally aligned
/// with [`definitions`].
#[derive(Debug, Clone)]
pub struct Selection(Vec<bool>);

impl Selection {
    /// Resolves the comma-separated 1/0 selection token against the catalog.
    ///
    /// The token must carry exactly one entry per catalog position; a short
    /// or long token is a configuration error, not padded or truncated. An
    /// entry is enabled iff it is literally `1`.
    pub fn resolve(token: &str) -> Result<Self> {
        let token = crate::core::config::strip_quotes(token);
        let states: Vec<bool> = if token.is_empty() {
            Vec::new()
        } else {
            token.split(',').map(|t| t == "1").collect()
        };
        if states.len() != CATALOG.len() {
            return Err(MonitorError::config(format!(
                "metric selection has {} entries, catalog defines {}",
                states.len(),
                CATALOG.len()
            )));
        }
        Ok(Self(states))
    }

    /// Enables every catalog entry.
    pub fn all() -> Self {
        Self(vec![true; CATALOG.len()])
    }

    /// Whether the catalog entry at `index` is enabled.
    pub fn is_enabled(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Number of enabled entries.
    pub fn enabled_count(&self) -> usize {
        self.0.iter().filter(|&&on| on).count()
    }
}
