//! Command-line interface for amqmon.
//!
//! The surface is deliberately positional-only: the calling monitoring
//! pipeline invokes the collector with seven fixed arguments, in order.
//! Anything it cannot parse is a "wrong number of parameters" failure
//! (exit code 3).

use crate::catalog::Selection;
use crate::client::JolokiaClient;
use crate::collector::Collector;
use crate::core::{MonitorConfig, Result};
use crate::export;
use crate::filter::NameFilter;
use clap::Parser;

/// One-shot ActiveMQ performance collector over the Jolokia management API.
#[derive(Parser, Debug)]
#[command(name = "amqmon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Comma-separated 1/0 metric selection, one entry per catalog metric
    /// in fixed catalog order
    pub metric_state: String,

    /// ActiveMQ hostname or IP address
    pub host: String,

    /// Admin (Jolokia) port; an empty string defaults to 8161
    pub admin_port: String,

    /// Broker name as registered in the management tree
    pub broker: String,

    /// Semicolon-separated destination-name filter; empty matches all
    pub filter: String,

    /// Username; empty for anonymous access
    pub username: String,

    /// Password
    pub password: String,
}

/// Initializes stderr logging from `AMQMON_LOG` / `RUST_LOG`.
///
/// Diagnostics must never land on stdout: the calling pipeline parses
/// stdout as metric lines (or a terminal error message).
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = std::env::var("AMQMON_LOG").unwrap_or_else(|_| "warn".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact();

    // Already-initialized is fine (repeat calls from tests).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Runs one collection pass and writes the records to stdout.
pub async fn execute(cli: Cli) -> Result<()> {
    let selection = Selection::resolve(&cli.metric_state)?;
    let config = MonitorConfig::from_args(
        &cli.host,
        &cli.admin_port,
        &cli.broker,
        &cli.filter,
        &cli.username,
        &cli.password,
    )?;
    let filter = NameFilter::new(&config.filter);

    tracing::info!(
        host = %config.host,
        port = config.port,
        broker = %config.broker,
        enabled = selection.enabled_count(),
        "starting collection pass"
    );

    let client = JolokiaClient::new(&config)?;
    let collector = Collector::new(&client, &selection, &filter, &config.broker);
    let records = collector.collect().await?;

    let stdout = std::io::stdout();
    export::write_records(&mut stdout.lock(), &records)
}
