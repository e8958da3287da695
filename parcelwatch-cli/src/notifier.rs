//! Desktop notification delivery
//!
//! Notifications are fire-and-forget: delivery problems are logged and
//! swallowed so they can never stall the polling loop or touch its state.

use async_trait::async_trait;
use parcelwatch_core::event::ShipmentUpdate;
use tokio::process::Command;
use tracing::debug;

/// Side-effect interface invoked once per newly observed event.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Announces a new tracking event. Must not fail the caller.
    async fn notify(&self, update: &ShipmentUpdate);
}

/// Delivers a desktop notification plus a spoken alert through OS tools.
///
/// Uses `osascript`/`say` on macOS and `notify-send`/`spd-say` elsewhere.
/// The spawned processes are detached; their exit status is not awaited.
pub struct DesktopNotifier;

impl DesktopNotifier {
    /// Creates a new desktop notifier
    pub fn new() -> Self {
        Self
    }

    fn spawn_quiet(program: &str, args: &[&str]) {
        if let Err(e) = Command::new(program).args(args).spawn() {
            debug!("Could not spawn {}: {}", program, e);
        }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for DesktopNotifier {
    async fn notify(&self, update: &ShipmentUpdate) {
        let title = format!("New shipment update! ({})", update.shipment_id);

        if cfg!(target_os = "macos") {
            let script = match &update.location {
                Some(place) => format!(
                    "display notification \"{}\" with title \"{}\" subtitle \"{}\"",
                    update.description, title, place
                ),
                None => format!(
                    "display notification \"{}\" with title \"{}\"",
                    update.description, title
                ),
            };
            Self::spawn_quiet("osascript", &["-e", &script]);
            Self::spawn_quiet("say", &["New shipment update!"]);
        } else {
            let body = match &update.location {
                Some(place) => format!("[{}] {}", place, update.description),
                None => update.description.clone(),
            };
            Self::spawn_quiet("notify-send", &[&title, &body]);
            Self::spawn_quiet("spd-say", &["New shipment update!"]);
        }
    }
}
