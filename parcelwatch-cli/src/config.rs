//! CLI configuration
//!
//! All runtime settings come from flags (with environment fallbacks) and are
//! read once at startup. The poll period is a fixed constant, not a flag.

use clap::{Parser, ValueEnum};
use std::fmt;
use std::time::Duration;

/// How often to check for new tracking events.
pub const POLL_INTERVAL: Duration = Duration::from_secs(300);

/// Response locale accepted by the tracking endpoint.
///
/// Anything outside this list is rejected by clap before any fetch happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    /// English event descriptions
    En,
    /// Swedish event descriptions
    Sv,
}

impl Locale {
    /// Query-parameter form expected by the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Sv => "sv",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Watch a shipment and get notified when a new tracking event appears
#[derive(Debug, Parser)]
#[command(name = "parcelwatch")]
#[command(about = "Desktop notifications for parcel tracking events", long_about = None)]
pub struct Config {
    /// Shipment identifier to track
    #[arg(short = 's', long, env = "PARCELWATCH_SHIPMENT_ID")]
    pub shipment_id: String,

    /// API key for the tracking endpoint
    #[arg(short = 'k', long, env = "PARCELWATCH_API_KEY", default_value = "")]
    pub api_key: String,

    /// Locale for event descriptions
    #[arg(short = 'l', long, value_enum, default_value_t = Locale::En)]
    pub locale: Locale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipment_id_is_required() {
        let result = Config::try_parse_from(["parcelwatch"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["parcelwatch", "-s", "ABC123"]).unwrap();
        assert_eq!(config.shipment_id, "ABC123");
        assert_eq!(config.api_key, "");
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_long_and_short_flags() {
        let config = Config::try_parse_from([
            "parcelwatch",
            "--shipment-id",
            "ABC123",
            "-k",
            "secret",
            "--locale",
            "sv",
        ])
        .unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.locale, Locale::Sv);
    }

    #[test]
    fn test_locale_outside_allow_list_is_rejected() {
        let result = Config::try_parse_from(["parcelwatch", "-s", "ABC123", "-l", "de"]);
        let err = result.unwrap_err();
        // clap lists the allowed values in the usage error
        assert!(err.to_string().contains("en"));
        assert!(err.to_string().contains("sv"));
    }

    #[test]
    fn test_poll_interval_is_five_minutes() {
        assert_eq!(POLL_INTERVAL, Duration::from_secs(300));
    }
}
