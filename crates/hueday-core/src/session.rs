//! The color session: history navigation, copying and side effects.
//!
//! A [`Session`] owns everything that lives for one visit: the history of
//! generated colors, the copy acknowledgment, and the adapters it reports
//! to. Every mutating operation finishes its state change first, then runs
//! its side effects (storage, telemetry, hooks) independently: a failing
//! effect is logged and never stops the ones after it.

use crate::color::{ColorEntry, TextColor};
use crate::config::SessionConfig;
use crate::history::History;
use crate::source::ColorSource;
use crate::storage::{ColorLog, KeyValueStore, MemoryStore};
use crate::telemetry::{NoopTelemetry, Telemetry, TelemetryEvent};
use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Clipboard write failure.
#[derive(Debug, Error)]
#[error("Clipboard error: {0}")]
pub struct ClipboardError(pub String);

/// Destination for copied text.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard that drops everything.
#[derive(Debug, Default)]
pub struct NoopClipboard;

impl Clipboard for NoopClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}

/// Called with the new current color and its contrast color.
pub type ColorHook = Box<dyn FnMut(&ColorEntry, TextColor)>;

/// Transient "Copied" flag with a deadline.
#[derive(Debug, Clone)]
pub struct CopyAck {
    duration: Duration,
    armed_at: Option<Instant>,
}

impl CopyAck {
    pub fn new(duration: Duration) -> Self {
        Self { duration, armed_at: None }
    }

    /// Show the flag from `now`. Re-arming replaces any earlier deadline.
    pub fn trigger(&mut self, now: Instant) {
        self.armed_at = Some(now);
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.remaining(now).is_some()
    }

    /// Time until the flag clears, if it is showing.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let armed_at = self.armed_at?;
        let elapsed = now.saturating_duration_since(armed_at);
        (elapsed < self.duration).then(|| self.duration - elapsed)
    }
}

/// Builds a [`Session`] with defaults for anything not supplied.
pub struct SessionBuilder {
    source: Option<ColorSource>,
    store: Option<Box<dyn KeyValueStore>>,
    telemetry: Option<Box<dyn Telemetry>>,
    clipboard: Option<Box<dyn Clipboard>>,
    hooks: Vec<ColorHook>,
    config: SessionConfig,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            source: None,
            store: None,
            telemetry: None,
            clipboard: None,
            hooks: Vec::new(),
            config: SessionConfig::default(),
        }
    }

    pub fn source(mut self, source: ColorSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn store(mut self, store: Box<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn telemetry(mut self, telemetry: Box<dyn Telemetry>) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    pub fn clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn on_current_changed(
        mut self,
        hook: impl FnMut(&ColorEntry, TextColor) + 'static,
    ) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Generate the first color and start the session.
    pub fn start(self) -> Session {
        let mut source = self.source.unwrap_or_else(ColorSource::random);
        let first = source.generate();
        log::info!("Session started with {} ({})", first.hex, first.name);

        let mut session = Session {
            source,
            history: History::new(first),
            log: ColorLog::new(self.store.unwrap_or_else(|| Box::new(MemoryStore::new()))),
            telemetry: self.telemetry.unwrap_or_else(|| Box::new(NoopTelemetry)),
            clipboard: self.clipboard.unwrap_or_else(|| Box::new(NoopClipboard)),
            hooks: self.hooks,
            copy_ack: CopyAck::new(self.config.copy_ack),
        };

        let entry = session.current().clone();
        session.emit(TelemetryEvent::PageLoad { entry });
        session.notify();
        session
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One visit's worth of color browsing.
pub struct Session {
    source: ColorSource,
    history: History,
    log: ColorLog,
    telemetry: Box<dyn Telemetry>,
    clipboard: Box<dyn Clipboard>,
    hooks: Vec<ColorHook>,
    copy_ack: CopyAck,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Color under the cursor.
    pub fn current(&self) -> &ColorEntry {
        self.history.current()
    }

    /// Legible foreground for the current color.
    pub fn text_color(&self) -> TextColor {
        self.current().text_color()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn index(&self) -> usize {
        self.history.cursor()
    }

    /// Register a hook and run it once for the current color.
    pub fn on_current_changed(&mut self, mut hook: impl FnMut(&ColorEntry, TextColor) + 'static) {
        let current = self.history.current();
        hook(current, current.text_color());
        self.hooks.push(Box::new(hook));
    }

    /// Generate a new color after the cursor, discarding any forward entries.
    pub fn advance(&mut self) -> &ColorEntry {
        let entry = self.source.generate();
        self.history.push(entry.clone());
        let index = self.history.cursor();
        log::debug!("Advanced to {} ({}) at {}", entry.hex, entry.name, index);

        if let Err(e) = self.log.record_viewed(self.history.entries()) {
            log::warn!("Failed to persist viewed colors: {}", e);
        }
        self.emit(TelemetryEvent::NextColor { entry, index });
        self.notify();
        self.current()
    }

    /// Step back one color. Returns false (and does nothing) at the start.
    pub fn retreat(&mut self) -> bool {
        if !self.history.back() {
            return false;
        }
        let entry = self.current().clone();
        let index = self.history.cursor();
        log::debug!("Retreated to {} ({}) at {}", entry.hex, entry.name, index);

        self.emit(TelemetryEvent::PrevColor { entry, index });
        self.notify();
        true
    }

    /// Copy the current hex to the clipboard and remember it.
    pub fn copy(&mut self) {
        self.copy_at(Instant::now());
    }

    pub fn copy_at(&mut self, now: Instant) {
        let entry = self.current().clone();
        let index = self.history.cursor();

        if let Err(e) = self.clipboard.write_text(&entry.hex.to_string()) {
            log::warn!("Failed to copy {}: {}", entry.hex, e);
        }
        match self.log.record_copied(&entry) {
            Ok(true) => log::debug!("Recorded copy of {}", entry.hex),
            Ok(false) => {}
            Err(e) => log::warn!("Failed to persist copied colors: {}", e),
        }
        self.copy_ack.trigger(now);
        self.emit(TelemetryEvent::ColorCopied { entry, index });
    }

    /// Whether the "Copied" acknowledgment is showing.
    pub fn is_copied(&self) -> bool {
        self.is_copied_at(Instant::now())
    }

    pub fn is_copied_at(&self, now: Instant) -> bool {
        self.copy_ack.is_visible(now)
    }

    /// Time until the acknowledgment clears, if showing.
    pub fn copy_ack_remaining(&self) -> Option<Duration> {
        self.copy_ack.remaining(Instant::now())
    }

    /// Persisted copied colors (for display).
    pub fn copied_colors(&self) -> Vec<ColorEntry> {
        self.log.copied().unwrap_or_else(|e| {
            log::warn!("Failed to read copied colors: {}", e);
            Vec::new()
        })
    }

    fn emit(&self, event: TelemetryEvent) {
        if let Err(e) = self.telemetry.capture(&event) {
            log::warn!("Failed to send {} event: {}", event.name(), e);
        }
    }

    fn notify(&mut self) {
        let current = self.history.current();
        let text_color = current.text_color();
        for hook in &mut self.hooks {
            hook(current, text_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;
    use crate::source::{ColorGenerator, ColorNamer};
    use crate::storage::{COPIED_COLORS_KEY, StorageError, StorageResult, VIEWED_COLORS_KEY};
    use crate::telemetry::TelemetryError;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::sync::Arc;

    /// Yields grays 0x10, 0x20, 0x30, ...
    struct StepGenerator {
        next: u8,
    }

    impl ColorGenerator for StepGenerator {
        fn random_hex(&mut self) -> HexColor {
            self.next = self.next.wrapping_add(0x10);
            HexColor::new(self.next, self.next, self.next)
        }
    }

    struct QueueGenerator(VecDeque<HexColor>);

    impl ColorGenerator for QueueGenerator {
        fn random_hex(&mut self) -> HexColor {
            self.0.pop_front().unwrap_or(HexColor::BLACK)
        }
    }

    struct HexNamer;

    impl ColorNamer for HexNamer {
        fn nearest_name(&self, hex: &HexColor) -> String {
            format!("Name {hex}")
        }
    }

    #[derive(Clone, Default)]
    struct Recorder {
        events: Rc<RefCell<Vec<TelemetryEvent>>>,
        fail: bool,
    }

    impl Recorder {
        fn names(&self) -> Vec<&'static str> {
            self.events.borrow().iter().map(|e| e.name()).collect()
        }
    }

    impl Telemetry for Recorder {
        fn capture(&self, event: &TelemetryEvent) -> Result<(), TelemetryError> {
            self.events.borrow_mut().push(event.clone());
            if self.fail {
                return Err(TelemetryError::Transport("down".to_string()));
            }
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct TestClipboard {
        texts: Rc<RefCell<Vec<String>>>,
    }

    impl Clipboard for TestClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.texts.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct FailingClipboard;

    impl Clipboard for FailingClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError("denied".to_string()))
        }
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Unavailable("quota".to_string()))
        }
        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable("quota".to_string()))
        }
    }

    fn step_source() -> ColorSource {
        ColorSource::new(Box::new(StepGenerator { next: 0 }), Box::new(HexNamer))
    }

    fn gray(v: u8) -> ColorEntry {
        let hex = HexColor::new(v, v, v);
        ColorEntry::new(hex, format!("Name {hex}"))
    }

    fn viewed(store: &MemoryStore) -> Vec<ColorEntry> {
        serde_json::from_str(&store.get(VIEWED_COLORS_KEY).unwrap().unwrap()).unwrap()
    }

    #[test]
    fn test_start_creates_single_entry_and_reports_load() {
        let recorder = Recorder::default();
        let store = Arc::new(MemoryStore::new());
        let session = Session::builder()
            .source(step_source())
            .store(Box::new(store.clone()))
            .telemetry(Box::new(recorder.clone()))
            .start();

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.index(), 0);
        assert_eq!(session.current(), &gray(0x10));
        assert_eq!(
            *recorder.events.borrow(),
            vec![TelemetryEvent::PageLoad { entry: gray(0x10) }]
        );
        // History is only written on advance.
        assert!(store.get(VIEWED_COLORS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_advance_persists_and_reports() {
        let recorder = Recorder::default();
        let store = Arc::new(MemoryStore::new());
        let mut session = Session::builder()
            .source(step_source())
            .store(Box::new(store.clone()))
            .telemetry(Box::new(recorder.clone()))
            .start();

        let next = session.advance().clone();
        assert_eq!(next, gray(0x20));
        assert_eq!(session.index(), 1);
        assert_eq!(viewed(&store), vec![gray(0x10), gray(0x20)]);
        assert_eq!(
            recorder.events.borrow().last(),
            Some(&TelemetryEvent::NextColor { entry: gray(0x20), index: 1 })
        );
    }

    #[test]
    fn test_retreat_at_start_is_silent_noop() {
        let recorder = Recorder::default();
        let hook_calls = Rc::new(RefCell::new(0));
        let calls = hook_calls.clone();
        let mut session = Session::builder()
            .source(step_source())
            .telemetry(Box::new(recorder.clone()))
            .on_current_changed(move |_, _| *calls.borrow_mut() += 1)
            .start();

        assert!(!session.retreat());
        assert_eq!(session.index(), 0);
        assert_eq!(session.history().len(), 1);
        assert_eq!(recorder.names(), vec!["page_load"]);
        assert_eq!(*hook_calls.borrow(), 1);
    }

    #[test]
    fn test_retreat_reports_new_position() {
        let recorder = Recorder::default();
        let mut session = Session::builder()
            .source(step_source())
            .telemetry(Box::new(recorder.clone()))
            .start();

        session.advance();
        session.advance();
        assert!(session.retreat());
        assert_eq!(session.current(), &gray(0x20));
        assert_eq!(
            recorder.events.borrow().last(),
            Some(&TelemetryEvent::PrevColor { entry: gray(0x20), index: 1 })
        );
    }

    #[test]
    fn test_advance_after_retreat_truncates() {
        let mut session = Session::builder().source(step_source()).start();
        session.advance();
        session.advance();
        assert_eq!(session.history().len(), 3);

        session.retreat();
        session.retreat();
        session.advance();
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.index(), 1);
    }

    #[test]
    fn test_end_to_end_history_scenario() {
        let colors = ["#e00000", "#00e000", "#0000e0", "#e0e000"]
            .into_iter()
            .map(|s| HexColor::parse(s).unwrap())
            .collect();
        let source = ColorSource::new(Box::new(QueueGenerator(colors)), Box::new(HexNamer));
        let store = Arc::new(MemoryStore::new());
        let mut session = Session::builder()
            .source(source)
            .store(Box::new(store.clone()))
            .start();
        let e0 = session.current().clone();

        let e1 = session.advance().clone();
        assert_eq!(session.index(), 1);
        assert_eq!(viewed(&store), vec![e0.clone(), e1.clone()]);

        let e2 = session.advance().clone();
        assert_eq!(session.index(), 2);
        assert_eq!(viewed(&store), vec![e0.clone(), e1.clone(), e2.clone()]);

        assert!(session.retreat());
        assert_eq!(session.index(), 1);
        assert_eq!(session.current(), &e1);

        let e3 = session.advance().clone();
        assert_eq!(session.index(), 2);
        assert_eq!(viewed(&store), vec![e0, e1, e3.clone()]);
        assert!(!session.history().entries().contains(&e2));
        assert_eq!(e3.hex.to_string(), "#e0e000");
    }

    #[test]
    fn test_hooks_fire_on_every_change() {
        let seen: Rc<RefCell<Vec<(HexColor, TextColor)>>> = Rc::default();
        let sink = seen.clone();
        let mut session = Session::builder()
            .source(step_source())
            .on_current_changed(move |entry, text| sink.borrow_mut().push((entry.hex, text)))
            .start();

        session.advance();
        session.retreat();
        session.retreat();
        session.copy();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].0, HexColor::new(0x10, 0x10, 0x10));
        assert_eq!(seen[1].0, HexColor::new(0x20, 0x20, 0x20));
        assert_eq!(seen[2].0, HexColor::new(0x10, 0x10, 0x10));
        assert!(seen.iter().all(|(_, text)| *text == TextColor::White));
    }

    #[test]
    fn test_late_hook_runs_immediately() {
        let mut session = Session::builder().source(step_source()).start();
        session.advance();

        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        session.on_current_changed(move |entry, _| *sink.borrow_mut() = Some(entry.hex));
        assert_eq!(*seen.borrow(), Some(HexColor::new(0x20, 0x20, 0x20)));
    }

    #[test]
    fn test_copy_keeps_unreadable_copied_list() {
        let stored = r##"[{"hex":"#000001","name":"A"},{"hex":"#0000"##;
        let clipboard = TestClipboard::default();
        let store = Arc::new(MemoryStore::new());
        store.set(COPIED_COLORS_KEY, stored).unwrap();
        let mut session = Session::builder()
            .source(step_source())
            .store(Box::new(store.clone()))
            .clipboard(Box::new(clipboard.clone()))
            .start();

        session.copy();

        assert_eq!(*clipboard.texts.borrow(), vec!["#101010"]);
        assert!(session.is_copied());
        assert_eq!(store.get(COPIED_COLORS_KEY).unwrap().as_deref(), Some(stored));
    }

    #[test]
    fn test_copy_writes_clipboard_and_deduplicates() {
        let recorder = Recorder::default();
        let clipboard = TestClipboard::default();
        let store = Arc::new(MemoryStore::new());
        let mut session = Session::builder()
            .source(step_source())
            .store(Box::new(store.clone()))
            .telemetry(Box::new(recorder.clone()))
            .clipboard(Box::new(clipboard.clone()))
            .start();

        session.copy();
        session.copy();
        session.advance();
        session.copy();
        session.retreat();
        session.copy();

        assert_eq!(*clipboard.texts.borrow(), vec!["#101010", "#101010", "#202020", "#101010"]);
        assert_eq!(session.copied_colors(), vec![gray(0x10), gray(0x20)]);
        assert!(store.get(COPIED_COLORS_KEY).unwrap().is_some());
        assert_eq!(
            recorder.events.borrow().last(),
            Some(&TelemetryEvent::ColorCopied { entry: gray(0x10), index: 0 })
        );
        assert_eq!(recorder.names().iter().filter(|n| **n == "color_copied").count(), 4);
    }

    #[test]
    fn test_copy_ack_window() {
        let mut session = Session::builder().source(step_source()).start();
        let t0 = Instant::now();
        assert!(!session.is_copied_at(t0));

        session.copy_at(t0);
        assert!(session.is_copied_at(t0));
        assert!(session.is_copied_at(t0 + Duration::from_millis(1199)));
        assert!(!session.is_copied_at(t0 + Duration::from_millis(1200)));
    }

    #[test]
    fn test_second_copy_rearms_ack() {
        let mut session = Session::builder().source(step_source()).start();
        let t0 = Instant::now();

        session.copy_at(t0);
        session.copy_at(t0 + Duration::from_millis(1000));
        assert!(session.is_copied_at(t0 + Duration::from_millis(1500)));
        assert!(!session.is_copied_at(t0 + Duration::from_millis(2200)));
    }

    #[test]
    fn test_copy_ack_remaining() {
        let mut ack = CopyAck::new(Duration::from_millis(1200));
        let t0 = Instant::now();
        assert_eq!(ack.remaining(t0), None);

        ack.trigger(t0);
        assert_eq!(
            ack.remaining(t0 + Duration::from_millis(200)),
            Some(Duration::from_millis(1000))
        );
        assert_eq!(ack.remaining(t0 + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_custom_ack_duration() {
        let mut session = Session::builder()
            .source(step_source())
            .config(SessionConfig { copy_ack: Duration::from_millis(10) })
            .start();
        let t0 = Instant::now();
        session.copy_at(t0);
        assert!(!session.is_copied_at(t0 + Duration::from_millis(10)));
    }

    #[test]
    fn test_storage_failure_does_not_suppress_telemetry() {
        let recorder = Recorder::default();
        let mut session = Session::builder()
            .source(step_source())
            .store(Box::new(FailingStore))
            .telemetry(Box::new(recorder.clone()))
            .start();

        session.advance();
        session.copy_at(Instant::now());

        assert_eq!(session.index(), 1);
        assert_eq!(recorder.names(), vec!["page_load", "next_color", "color_copied"]);
        assert!(session.copied_colors().is_empty());
    }

    #[test]
    fn test_telemetry_and_clipboard_failures_are_isolated() {
        let recorder = Recorder { fail: true, ..Default::default() };
        let store = Arc::new(MemoryStore::new());
        let hook_calls = Rc::new(RefCell::new(0));
        let calls = hook_calls.clone();
        let mut session = Session::builder()
            .source(step_source())
            .store(Box::new(store.clone()))
            .telemetry(Box::new(recorder))
            .clipboard(Box::new(FailingClipboard))
            .on_current_changed(move |_, _| *calls.borrow_mut() += 1)
            .start();

        session.advance();
        let t0 = Instant::now();
        session.copy_at(t0);

        assert_eq!(*hook_calls.borrow(), 2);
        assert_eq!(viewed(&store).len(), 2);
        assert_eq!(session.copied_colors(), vec![gray(0x20)]);
        assert!(session.is_copied_at(t0));
    }

    #[test]
    fn test_history_invariant_under_random_walk() {
        let mut session = Session::builder().source(ColorSource::seeded(3)).start();
        let mut state = 0x9e37_79b9_u32;
        for _ in 0..300 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            if state % 2 == 0 {
                session.advance();
            } else {
                session.retreat();
            }
            let history = session.history();
            assert!(!history.is_empty());
            assert!(history.cursor() < history.len());
        }
    }
}
