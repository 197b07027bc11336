use serde_json::Number;
use std::fmt;

/// Whether a metric applies to the broker as a whole or to an individual
/// queue/topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Broker-wide metric, one value per run.
    Broker,
    /// Per-destination metric, one value per matching queue/topic.
    Destination,
}

/// A single extracted metric value.
///
/// Most values pass straight through from the management payload; uptime is
/// the one derived value (raw milliseconds rendered as hours with two
/// decimal places).
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    /// Numeric field taken verbatim from the payload.
    Number(Number),
    /// Hours derived from a millisecond counter.
    Hours(f64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Hours(h) => write!(f, "{:.2}", h),
        }
    }
}

/// One emitted measurement: a catalog identifier, its extracted value, and
/// the destination it belongs to (`None` for broker-scope metrics).
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    /// Opaque external metric code from the catalog.
    pub id: &'static str,
    /// Extracted value.
    pub value: MetricValue,
    /// Destination name; present iff the metric's scope is `Destination`.
    pub destination: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_rendering() {
        assert_eq!(MetricValue::Hours(7_200_000.0 / 3_600_000.0).to_string(), "2.00");
        assert_eq!(MetricValue::Hours(0.5).to_string(), "0.50");
    }

    #[test]
    fn test_number_passthrough() {
        let n: Number = serde_json::from_str("42").unwrap();
        assert_eq!(MetricValue::Number(n).to_string(), "42");
        let f: Number = serde_json::from_str("3.5").unwrap();
        assert_eq!(MetricValue::Number(f).to_string(), "3.5");
    }
}
