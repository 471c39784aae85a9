//! Analytics events.
//!
//! The session reports four events. When no analytics project is
//! configured they go to [`NoopTelemetry`]; otherwise [`CaptureTelemetry`]
//! turns each one into a capture request and hands it to a fire-and-forget
//! [`Transport`].

mod transport;

pub use transport::Transport;

#[cfg(not(target_arch = "wasm32"))]
pub use transport::HttpTransport;

#[cfg(target_arch = "wasm32")]
pub use transport::BeaconTransport;

use crate::color::ColorEntry;
use crate::config::TelemetryConfig;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Telemetry errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Transport error: {0}")]
    Transport(String),
}

/// An event emitted by the session.
#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryEvent {
    PageLoad { entry: ColorEntry },
    NextColor { entry: ColorEntry, index: usize },
    PrevColor { entry: ColorEntry, index: usize },
    ColorCopied { entry: ColorEntry, index: usize },
}

impl TelemetryEvent {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PageLoad { .. } => "page_load",
            Self::NextColor { .. } => "next_color",
            Self::PrevColor { .. } => "prev_color",
            Self::ColorCopied { .. } => "color_copied",
        }
    }

    pub fn entry(&self) -> &ColorEntry {
        match self {
            Self::PageLoad { entry }
            | Self::NextColor { entry, .. }
            | Self::PrevColor { entry, .. }
            | Self::ColorCopied { entry, .. } => entry,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Self::PageLoad { .. } => None,
            Self::NextColor { index, .. }
            | Self::PrevColor { index, .. }
            | Self::ColorCopied { index, .. } => Some(*index),
        }
    }

    pub fn properties(&self) -> EventProperties {
        let entry = self.entry();
        EventProperties {
            hex: entry.hex.to_string(),
            name: entry.name.clone(),
            index: self.index(),
        }
    }
}

/// Event payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventProperties {
    pub hex: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

/// Receives session events.
pub trait Telemetry {
    fn capture(&self, event: &TelemetryEvent) -> Result<(), TelemetryError>;

    /// Whether events go anywhere.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Swallows every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetry;

impl Telemetry for NoopTelemetry {
    fn capture(&self, _event: &TelemetryEvent) -> Result<(), TelemetryError> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Body of a capture request.
#[derive(Debug, Serialize)]
pub struct CapturePayload<'a> {
    pub api_key: &'a str,
    pub event: &'a str,
    pub distinct_id: &'a str,
    pub properties: EventProperties,
}

/// Sends capture requests to an analytics ingestion host.
pub struct CaptureTelemetry {
    config: TelemetryConfig,
    distinct_id: String,
    transport: Box<dyn Transport>,
}

impl CaptureTelemetry {
    /// New client with a random per-session distinct id.
    pub fn new(config: TelemetryConfig, transport: Box<dyn Transport>) -> Self {
        Self {
            config,
            distinct_id: Uuid::new_v4().to_string(),
            transport,
        }
    }

    pub fn distinct_id(&self) -> &str {
        &self.distinct_id
    }

    /// Serialized capture body for `event`.
    pub fn payload(&self, event: &TelemetryEvent) -> Result<String, TelemetryError> {
        let payload = CapturePayload {
            api_key: &self.config.api_key,
            event: event.name(),
            distinct_id: &self.distinct_id,
            properties: event.properties(),
        };
        serde_json::to_string(&payload).map_err(|e| TelemetryError::Serialization(e.to_string()))
    }
}

impl Telemetry for CaptureTelemetry {
    fn capture(&self, event: &TelemetryEvent) -> Result<(), TelemetryError> {
        let body = self.payload(event)?;
        log::debug!("Capturing {}", event.name());
        self.transport.send(&self.config.capture_url(), body)
    }
}

/// Telemetry for the given configuration: inert without one.
pub fn create_telemetry(config: Option<TelemetryConfig>) -> Box<dyn Telemetry> {
    let Some(config) = config else {
        log::info!("Telemetry disabled (no analytics key/host configured)");
        return Box::new(NoopTelemetry);
    };

    #[cfg(not(target_arch = "wasm32"))]
    let transport = HttpTransport::new();
    #[cfg(target_arch = "wasm32")]
    let transport = BeaconTransport::new();

    match transport {
        Ok(transport) => {
            log::info!("Telemetry enabled ({})", config.host);
            Box::new(CaptureTelemetry::new(config, Box::new(transport)))
        }
        Err(e) => {
            log::warn!("Telemetry disabled: {}", e);
            Box::new(NoopTelemetry)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingTransport {
        sent: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl Transport for RecordingTransport {
        fn send(&self, url: &str, body: String) -> Result<(), TelemetryError> {
            self.sent.lock().unwrap().push((url.to_string(), body));
            Ok(())
        }
    }

    fn entry() -> ColorEntry {
        ColorEntry::new(HexColor::new(0x33, 0xcc, 0x99), "Shamrock")
    }

    fn config() -> TelemetryConfig {
        TelemetryConfig::new("phc_test", "https://eu.example.com/").unwrap()
    }

    #[test]
    fn test_event_names() {
        let e = entry();
        assert_eq!(TelemetryEvent::PageLoad { entry: e.clone() }.name(), "page_load");
        assert_eq!(TelemetryEvent::NextColor { entry: e.clone(), index: 1 }.name(), "next_color");
        assert_eq!(TelemetryEvent::PrevColor { entry: e.clone(), index: 0 }.name(), "prev_color");
        assert_eq!(TelemetryEvent::ColorCopied { entry: e, index: 0 }.name(), "color_copied");
    }

    #[test]
    fn test_page_load_omits_index() {
        let props = TelemetryEvent::PageLoad { entry: entry() }.properties();
        assert_eq!(
            serde_json::to_string(&props).unwrap(),
            r##"{"hex":"#33cc99","name":"Shamrock"}"##
        );

        let props = TelemetryEvent::NextColor { entry: entry(), index: 3 }.properties();
        assert_eq!(
            serde_json::to_string(&props).unwrap(),
            r##"{"hex":"#33cc99","name":"Shamrock","index":3}"##
        );
    }

    #[test]
    fn test_capture_posts_payload() {
        let transport = RecordingTransport::default();
        let telemetry = CaptureTelemetry::new(config(), Box::new(transport.clone()));

        telemetry
            .capture(&TelemetryEvent::ColorCopied { entry: entry(), index: 2 })
            .unwrap();

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "https://eu.example.com/capture/");

        let body: serde_json::Value = serde_json::from_str(&sent[0].1).unwrap();
        assert_eq!(body["api_key"], "phc_test");
        assert_eq!(body["event"], "color_copied");
        assert_eq!(body["distinct_id"], telemetry.distinct_id());
        assert_eq!(body["properties"]["hex"], "#33cc99");
        assert_eq!(body["properties"]["index"], 2);
    }

    #[test]
    fn test_distinct_id_is_stable_per_client() {
        let telemetry = CaptureTelemetry::new(config(), Box::new(RecordingTransport::default()));
        let a = telemetry.payload(&TelemetryEvent::PageLoad { entry: entry() }).unwrap();
        let b = telemetry.payload(&TelemetryEvent::PageLoad { entry: entry() }).unwrap();
        assert_eq!(a, b);
        assert!(Uuid::parse_str(telemetry.distinct_id()).is_ok());
    }

    #[test]
    fn test_noop_and_factory() {
        assert!(!NoopTelemetry.is_enabled());
        assert!(NoopTelemetry.capture(&TelemetryEvent::PageLoad { entry: entry() }).is_ok());
        assert!(!create_telemetry(None).is_enabled());
    }
}
