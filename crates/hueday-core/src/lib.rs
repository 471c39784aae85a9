//! Hueday Core Library
//!
//! Platform-agnostic color generation, naming, history and persistence for
//! the Hueday color-of-the-day app.

pub mod color;
pub mod config;
pub mod favicon;
pub mod history;
pub mod palette;
pub mod session;
pub mod source;
pub mod storage;
pub mod telemetry;

pub use color::{ColorEntry, ColorError, HexColor, TextColor, text_color_for};
pub use config::{SessionConfig, TelemetryConfig};
pub use favicon::{FAVICON_SIZE, Favicon, FaviconError, FaviconPainter};
pub use history::History;
pub use palette::{NamedColor, Palette};
pub use session::{Clipboard, ClipboardError, CopyAck, NoopClipboard, Session, SessionBuilder};
pub use source::{ColorGenerator, ColorNamer, ColorSource, NearestNamer, RandomColor};
pub use storage::{ColorLog, KeyValueStore, MemoryStore, StorageError};
pub use telemetry::{NoopTelemetry, Telemetry, TelemetryError, TelemetryEvent, create_telemetry};
