//! Response-shape extraction
//!
//! The tracking endpoint returns a deeply nested payload and none of it can
//! be trusted. Extraction walks the required chain one named link at a time,
//! checking container type and non-emptiness before dereferencing, and
//! reports exactly which link failed. A failed link is a tick-scoped
//! condition for the caller, never a fatal error.

use serde_json::Value;
use thiserror::Error;

use crate::event::ShipmentEvent;

/// A payload that parsed as JSON but does not match the expected
/// nested shape at some level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("response body is not a JSON object")]
    NotAnObject,

    #[error("`TrackingInformationResponse` is missing or not an object")]
    TrackingInformation,

    #[error("`shipments` is missing or not an array")]
    Shipments,

    #[error("`shipments` is empty or its first element is not an object")]
    NoShipment,

    #[error("`shipments[0].items` is missing or not an array")]
    Items,

    #[error("`items` is empty or its first element is not an object")]
    NoItem,

    #[error("`items[0].events` is missing or not an array")]
    Events,

    #[error("`events` is empty")]
    NoEvents,

    #[error("latest event does not match the expected event shape: {0}")]
    EventShape(String),
}

/// Extracts the latest tracking event from a raw API payload.
///
/// The endpoint appends new events at the end of `events`, so the latest
/// event is the last array element.
pub fn latest_event(body: &Value) -> Result<ShipmentEvent, ShapeError> {
    let root = body.as_object().ok_or(ShapeError::NotAnObject)?;

    let info = root
        .get("TrackingInformationResponse")
        .and_then(Value::as_object)
        .ok_or(ShapeError::TrackingInformation)?;

    let shipments = info
        .get("shipments")
        .and_then(Value::as_array)
        .ok_or(ShapeError::Shipments)?;

    let shipment = shipments
        .first()
        .and_then(Value::as_object)
        .ok_or(ShapeError::NoShipment)?;

    let items = shipment
        .get("items")
        .and_then(Value::as_array)
        .ok_or(ShapeError::Items)?;

    let item = items
        .first()
        .and_then(Value::as_object)
        .ok_or(ShapeError::NoItem)?;

    let events = item
        .get("events")
        .and_then(Value::as_array)
        .ok_or(ShapeError::Events)?;

    let latest = events.last().ok_or(ShapeError::NoEvents)?;

    serde_json::from_value(latest.clone()).map_err(|e| ShapeError::EventShape(e.to_string()))
}
