//! The traversal engine: one complete, ordered measurement pass.
//!
//! A pass fetches the broker object, extracts its enabled metrics, then
//! walks every queue/topic the broker reports, fetching each surviving
//! destination strictly one at a time. The worklist is consumed
//! pop-from-end, so destinations are processed as all topics in reverse
//! enumeration order followed by all queues in reverse enumeration order.
//! That ordering is an output-compatibility requirement inherited from the
//! consuming pipeline; do not "fix" it to FIFO, and do not fan the fetches
//! out concurrently without re-validating it.

#![warn(missing_docs)]

use crate::catalog::{self, BrokerPayload, BrokerValue, DestinationPayload, DestinationRef, DestinationValue, Extractor, Selection};
use crate::client::{self, ManagementApi};
use crate::core::{MetricRecord, Result};
use crate::filter::NameFilter;

/// Runs one collection pass and accumulates the resulting records.
pub struct Collector<'a, C: ManagementApi + ?Sized> {
    client: &'a C,
    selection: &'a Selection,
    filter: &'a NameFilter,
    broker: &'a str,
}

impl<'a, C: ManagementApi + ?Sized> Collector<'a, C> {
    /// Creates a collector for one run.
    pub fn new(client: &'a C, selection: &'a Selection, filter: &'a NameFilter, broker: &'a str) -> Self {
        Self {
            client,
            selection,
            filter,
            broker,
        }
    }

    /// Produces the complete ordered record sequence for one run.
    ///
    /// Any failure aborts the whole pass; partial results are discarded by
    /// the caller, never emitted.
    pub async fn collect(&self) -> Result<Vec<MetricRecord>> {
        let body = self
            .client
            .fetch(&client::broker_object_path(self.broker))
            .await?;
        let broker: BrokerPayload = serde_json::from_str(&body)?;

        let mut records = Vec::new();
        self.extract_broker(&broker.value, &mut records);

        // Queues first, then topics; Vec::pop then drains topics in
        // reverse, then queues in reverse.
        let BrokerValue { queues, topics, .. } = broker.value;
        let mut worklist: Vec<DestinationRef> = queues;
        worklist.extend(topics);

        while let Some(destination) = worklist.pop() {
            let name = destination.destination_name()?;
            if !self.filter.matches(name) {
                tracing::debug!(name, "destination filtered out, skipping fetch");
                continue;
            }

            let body = self
                .client
                .fetch(&client::object_path(&destination.object_name))
                .await?;
            let payload: DestinationPayload = serde_json::from_str(&body)?;
            self.extract_destination(&payload.value, name, &mut records);
        }

        tracing::debug!(records = records.len(), "collection pass complete");
        Ok(records)
    }

    fn extract_broker(&self, value: &BrokerValue, records: &mut Vec<MetricRecord>) {
        for (index, definition) in catalog::definitions().iter().enumerate() {
            if !self.selection.is_enabled(index) {
                continue;
            }
            if let Extractor::Broker(stat) = definition.extractor {
                records.push(MetricRecord {
                    id: definition.id,
                    value: stat.read(value),
                    destination: None,
                });
            }
        }
    }

    fn extract_destination(&self, value: &DestinationValue, name: &str, records: &mut Vec<MetricRecord>) {
        for (index, definition) in catalog::definitions().iter().enumerate() {
            if !self.selection.is_enabled(index) {
                continue;
            }
            if let Extractor::Destination(stat) = definition.extractor {
                records.push(MetricRecord {
                    id: definition.id,
                    value: stat.read(value),
                    destination: Some(name.to_owned()),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MonitorError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Scripted management API: serves canned bodies and records every
    /// fetched path in order.
    struct ScriptedApi {
        responses: HashMap<String, String>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedApi {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn respond(&mut self, path: &str, body: &str) {
            self.responses.insert(path.to_string(), body.to_string());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ManagementApi for ScriptedApi {
        async fn fetch(&self, path: &str) -> crate::core::Result<String> {
            self.calls.lock().unwrap().push(path.to_string());
            self.responses
                .get(path)
                .cloned()
                .ok_or(MonitorError::Http(404))
        }
    }

    fn object_name(kind: &str, name: &str) -> String {
        format!(
            "org.apache.activemq:type=Broker,brokerName=localhost,destinationType={},destinationName={},x=y",
            kind, name
        )
    }

    fn broker_body(queues: &[&str], topics: &[&str]) -> String {
        let refs = |names: &[&str], kind: &str| {
            let entries: Vec<String> = names
                .iter()
                .map(|n| format!(r#"{{"objectName":"{}"}}"#, object_name(kind, n)))
                .collect();
            format!("[{}]", entries.join(","))
        };
        format!(
            r#"{{"value":{{
                "UptimeMillis": 3600000,
                "MemoryPercentUsage": 10,
                "StorePercentUsage": 20,
                "TempPercentUsage": 30,
                "TotalConnectionsCount": 4,
                "CurrentConnectionsCount": 2,
                "AverageMessageSize": 512,
                "TotalMessageCount": 7,
                "TotalDequeueCount": 8,
                "TotalEnqueueCount": 9,
                "TotalProducerCount": 1,
                "TotalConsumerCount": 1,
                "Queues": {},
                "Topics": {}
            }}}}"#,
            refs(queues, "Queue"),
            refs(topics, "Topic")
        )
    }

    fn destination_body(name: &str, queue_size: u64) -> String {
        format!(
            r#"{{"value":{{
                "Name": "{}",
                "MemoryPercentUsage": 1,
                "QueueSize": {},
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
            name, queue_size
        )
    }

    fn scripted(queues: &[&str], topics: &[&str]) -> ScriptedApi {
        let mut api = ScriptedApi::new();
        api.respond(
            &client::broker_object_path("localhost"),
            &broker_body(queues, topics),
        );
        for q in queues {
            api.respond(&client::object_path(&object_name("Queue", q)), &destination_body(q, 5));
        }
        for t in topics {
            api.respond(&client::object_path(&object_name("Topic", t)), &destination_body(t, 5));
        }
        api
    }

    #[tokio::test]
    async fn test_traversal_completeness_and_order() {
        let api = scripted(&["Q1", "Q2"], &["T1", "T2"]);
        let selection = Selection::all();
        let filter = NameFilter::default();
        let collector = Collector::new(&api, &selection, &filter, "localhost");

        let records = collector.collect().await.unwrap();

        // 1 broker fetch + all 4 destinations fetched.
        let calls = api.calls();
        assert_eq!(calls.len(), 5);

        // Pop-from-end: topics in reverse enumeration order, then queues in
        // reverse enumeration order.
        assert!(calls[1].contains("destinationName=T2"));
        assert!(calls[2].contains("destinationName=T1"));
        assert!(calls[3].contains("destinationName=Q2"));
        assert!(calls[4].contains("destinationName=Q1"));

        // 14 broker records, then 18 per destination in traversal order.
        assert_eq!(records.len(), 14 + 4 * 18);
        assert!(records[..14].iter().all(|r| r.destination.is_none()));
        let destinations: Vec<&str> = records[14..]
            .iter()
            .step_by(18)
            .map(|r| r.destination.as_deref().unwrap())
            .collect();
        assert_eq!(destinations, vec!["T2", "T1", "Q2", "Q1"]);
    }

    #[tokio::test]
    async fn test_records_follow_catalog_order_per_destination() {
        let api = scripted(&["Q1"], &[]);
        let selection = Selection::all();
        let filter = NameFilter::default();
        let collector = Collector::new(&api, &selection, &filter, "localhost");

        let records = collector.collect().await.unwrap();
        let expected: Vec<&str> = catalog::definitions().iter().map(|d| d.id).collect();
        let emitted: Vec<&str> = records.iter().map(|r| r.id).collect();
        assert_eq!(emitted, expected);
    }

    #[tokio::test]
    async fn test_filter_short_circuits_fetch() {
        let api = scripted(&["Orders", "Shipping"], &[]);
        let selection = Selection::all();
        let filter = NameFilter::new(["orders"]);
        let collector = Collector::new(&api, &selection, &filter, "localhost");

        let records = collector.collect().await.unwrap();

        let calls = api.calls();
        assert_eq!(calls.len(), 2); // broker + Orders only
        assert!(calls[1].contains("destinationName=Orders"));
        assert!(records
            .iter()
            .filter_map(|r| r.destination.as_deref())
            .all(|d| d == "Orders"));
    }

    #[tokio::test]
    async fn test_broker_record_count_tracks_selection() {
        // Enable only the first three broker metrics and one destination
        // metric (index 14).
        let mut token: Vec<&str> = vec!["0"; 32];
        token[0] = "1";
        token[1] = "1";
        token[2] = "1";
        token[14] = "1";
        let selection = Selection::resolve(&token.join(",")).unwrap();

        let api = scripted(&["Q1"], &[]);
        let filter = NameFilter::default();
        let collector = Collector::new(&api, &selection, &filter, "localhost");

        let records = collector.collect().await.unwrap();
        let broker_records: Vec<_> = records.iter().filter(|r| r.destination.is_none()).collect();
        assert_eq!(broker_records.len(), 3);
        assert_eq!(broker_records[0].id, "1769:Uptime:4");
        assert_eq!(broker_records[0].value.to_string(), "1.00");

        let dest_records: Vec<_> = records.iter().filter(|r| r.destination.is_some()).collect();
        assert_eq!(dest_records.len(), 1);
        assert_eq!(dest_records[0].id, "1783:Memory Usage:6");
    }

    #[tokio::test]
    async fn test_destination_fetch_failure_aborts_run() {
        let mut api = ScriptedApi::new();
        api.respond(
            &client::broker_object_path("localhost"),
            &broker_body(&["Q1"], &[]),
        );
        // No response scripted for Q1: the fetch fails.
        let selection = Selection::all();
        let filter = NameFilter::default();
        let collector = Collector::new(&api, &selection, &filter, "localhost");

        let err = collector.collect().await.unwrap_err();
        assert!(matches!(err, MonitorError::Http(404)));
    }

    #[tokio::test]
    async fn test_records_tagged_with_derived_name() {
        // The object name says "Orders"; the payload Name field disagrees.
        // Records carry the name derived from the object name.
        let mut api = ScriptedApi::new();
        api.respond(
            &client::broker_object_path("localhost"),
            &broker_body(&["Orders"], &[]),
        );
        api.respond(
            &client::object_path(&object_name("Queue", "Orders")),
            &destination_body("SomethingElse", 5),
        );
        let selection = Selection::all();
        let filter = NameFilter::default();
        let collector = Collector::new(&api, &selection, &filter, "localhost");

        let records = collector.collect().await.unwrap();
        assert!(records
            .iter()
            .filter_map(|r| r.destination.as_deref())
            .all(|d| d == "Orders"));
    }
}
