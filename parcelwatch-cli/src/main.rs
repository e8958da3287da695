//! parcelwatch
//!
//! Watches a single shipment through the PostNord track-and-trace API.
//!
//! Architecture:
//! - Configuration: flags with environment fallbacks, read once at startup
//! - Client: one HTTP GET per tick against the lookup endpoint
//! - Poller: fetch, validate the nested payload, compare against the last
//!   seen event, announce anything new
//! - Notifier: fire-and-forget desktop notification and spoken alert
//!
//! The process runs until it is killed or a transport error occurs; a
//! malformed payload only skips the affected tick.

mod config;
mod notifier;
mod poller;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::notifier::DesktopNotifier;
use crate::poller::ShipmentPoller;
use parcelwatch_client::TrackingClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parcelwatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing shipment id or an unknown locale exits here with a usage
    // error, before any fetch.
    let config = Config::parse();

    info!(
        "Tracking shipment {} (locale: {})",
        config.shipment_id, config.locale
    );

    let client = Arc::new(TrackingClient::new(config.api_key.clone()));
    let notifier = Arc::new(DesktopNotifier::new());

    let mut poller = ShipmentPoller::new(&config, client, notifier);

    if let Err(e) = poller.run().await {
        error!("Poller error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
