//! Tracking event domain types

use serde::{Deserialize, Serialize};

/// A single tracking event as reported by the carrier.
///
/// Only the fields the poller cares about are modeled; everything else in
/// the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentEvent {
    /// Opaque equality key. The carrier reports a timestamp here, but it is
    /// never parsed as a date, only compared for strict equality.
    pub event_time: String,
    /// Human-readable description shown to the user.
    #[serde(default)]
    pub event_description: String,
    /// Where the event happened, when the carrier reports it.
    #[serde(default)]
    pub location: Option<EventLocation>,
}

/// Location attached to a tracking event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLocation {
    #[serde(default)]
    pub display_name: Option<String>,
}

impl ShipmentEvent {
    /// Two events are the same observation iff their `event_time` keys are
    /// strictly equal. No ordering or further deduplication is attempted.
    pub fn is_same(&self, other: &ShipmentEvent) -> bool {
        self.event_time == other.event_time
    }

    /// Display name of the event location, when present.
    pub fn location_name(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.display_name.as_deref())
    }
}

/// What gets announced to the user for a newly observed event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentUpdate {
    /// Shipment the event belongs to, shown in the notification title
    pub shipment_id: String,
    /// Notification body text
    pub description: String,
    /// Notification subtitle, when the event carries a location
    pub location: Option<String>,
}

impl ShipmentUpdate {
    /// Builds the user-facing update for an event.
    pub fn new(shipment_id: impl Into<String>, event: &ShipmentEvent) -> Self {
        Self {
            shipment_id: shipment_id.into(),
            description: event.event_description.clone(),
            location: event.location_name().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserializes_from_carrier_payload() {
        let event: ShipmentEvent = serde_json::from_value(serde_json::json!({
            "eventTime": "2024-05-01T10:00:00",
            "eventDescription": "Arrived",
            "location": { "displayName": "Stockholm" },
            "status": "EN_ROUTE"
        }))
        .unwrap();

        assert_eq!(event.event_time, "2024-05-01T10:00:00");
        assert_eq!(event.event_description, "Arrived");
        assert_eq!(event.location_name(), Some("Stockholm"));
    }

    #[test]
    fn test_event_tolerates_missing_optional_fields() {
        let event: ShipmentEvent =
            serde_json::from_value(serde_json::json!({ "eventTime": "T1" })).unwrap();

        assert_eq!(event.event_description, "");
        assert_eq!(event.location_name(), None);
    }

    #[test]
    fn test_identity_is_event_time_only() {
        let a: ShipmentEvent = serde_json::from_value(serde_json::json!({
            "eventTime": "T1",
            "eventDescription": "Arrived"
        }))
        .unwrap();
        let b: ShipmentEvent = serde_json::from_value(serde_json::json!({
            "eventTime": "T1",
            "eventDescription": "Delivered"
        }))
        .unwrap();
        let c: ShipmentEvent = serde_json::from_value(serde_json::json!({
            "eventTime": "T2",
            "eventDescription": "Arrived"
        }))
        .unwrap();

        assert!(a.is_same(&b));
        assert!(!a.is_same(&c));
    }

    #[test]
    fn test_update_carries_location_when_present() {
        let event: ShipmentEvent = serde_json::from_value(serde_json::json!({
            "eventTime": "T1",
            "eventDescription": "Arrived",
            "location": { "displayName": "Stockholm" }
        }))
        .unwrap();

        let update = ShipmentUpdate::new("ABC123", &event);
        assert_eq!(update.shipment_id, "ABC123");
        assert_eq!(update.description, "Arrived");
        assert_eq!(update.location.as_deref(), Some("Stockholm"));
    }
}
