//! Parcelwatch Core
//!
//! Core types for the parcelwatch shipment tracker.
//!
//! This crate contains:
//! - Domain types: the tracking event and the update handed to notifiers
//! - Extraction: defensive walking of the carrier's nested response payload

pub mod event;
pub mod extract;
