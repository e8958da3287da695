//! Shipment poller
//!
//! Drives the fetch-validate-compare-notify loop: one tracking fetch per
//! tick, at most one notification per distinct event. The poller owns the
//! single piece of retained state, the last event it has announced.

use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;
use tokio::time;
use tracing::{debug, info, warn};

use crate::config::{Config, POLL_INTERVAL};
use crate::notifier::Notifier;
use parcelwatch_client::{ClientError, TrackingApi};
use parcelwatch_core::event::{ShipmentEvent, ShipmentUpdate};
use parcelwatch_core::extract;

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new event was observed, recorded and announced
    NewEvent,
    /// Payload was valid but the latest event was already seen
    Unchanged,
    /// Payload did not match the expected shape; tick skipped
    Malformed,
}

/// Poller that watches one shipment for new tracking events
pub struct ShipmentPoller {
    shipment_id: String,
    locale: &'static str,
    api: Arc<dyn TrackingApi>,
    notifier: Arc<dyn Notifier>,
    last_seen: Option<ShipmentEvent>,
}

impl ShipmentPoller {
    /// Creates a new poller with no previously seen event
    pub fn new(config: &Config, api: Arc<dyn TrackingApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            shipment_id: config.shipment_id.clone(),
            locale: config.locale.as_str(),
            api,
            notifier,
            last_seen: None,
        }
    }

    /// Starts the polling loop. The first tick fires immediately.
    ///
    /// Ticks are serialized: the next one is not started until the current
    /// one finishes, so at most one fetch is in flight at a time and a slow
    /// fetch delays later ticks instead of overlapping them.
    ///
    /// Returns only on a transport error, which is fatal by design; there
    /// is no retry or backoff.
    pub async fn run(&mut self) -> Result<()> {
        info!(
            "Starting shipment poller (shipment: {}, interval: {:?})",
            self.shipment_id, POLL_INTERVAL
        );

        let mut interval = time::interval(POLL_INTERVAL);

        loop {
            interval.tick().await;

            let outcome = self
                .tick()
                .await
                .context("Failed to fetch tracking information")?;

            debug!(?outcome, "Tick finished");
        }
    }

    /// Performs one fetch-validate-compare-notify cycle.
    ///
    /// Transport errors bubble up to the caller. A payload with the wrong
    /// shape is logged and skipped without touching state, and a repeat of
    /// the already-seen event does nothing.
    pub async fn tick(&mut self) -> std::result::Result<TickOutcome, ClientError> {
        debug!("Checking for updates...");

        let body = self
            .api
            .fetch_tracking(&self.shipment_id, self.locale)
            .await?;

        let event = match extract::latest_event(&body) {
            Ok(event) => event,
            Err(e) => {
                warn!("Unexpected API response: {}", e);
                return Ok(TickOutcome::Malformed);
            }
        };

        if self.last_seen.as_ref().is_some_and(|p| p.is_same(&event)) {
            return Ok(TickOutcome::Unchanged);
        }

        let update = ShipmentUpdate::new(&self.shipment_id, &event);
        match &update.location {
            Some(place) => println!(
                "{}\n - [{}] {}",
                "Got new event!".bold(),
                place,
                update.description
            ),
            None => println!("{}\n - {}", "Got new event!".bold(), update.description),
        }
        info!(event_time = %event.event_time, "New tracking event");

        self.last_seen = Some(event);
        self.notifier.notify(&update).await;

        Ok(TickOutcome::NewEvent)
    }

    /// Latest event the poller has announced, if any
    pub fn last_seen(&self) -> Option<&ShipmentEvent> {
        self.last_seen.as_ref()
    }
}
