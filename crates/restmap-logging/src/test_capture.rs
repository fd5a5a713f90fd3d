//! In-memory log capture for deterministic test assertions
//!
//! Installs a tracing layer that records every event with its level, target,
//! and fields. Tests query the captured events instead of parsing formatted
//! output.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::Visit;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One captured log event
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    /// The event's `message` field, when present
    pub message: Option<String>,
    /// All recorded fields, stringified
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    /// Whether a field was recorded with exactly this value
    pub fn has_field(&self, name: &str, value: &str) -> bool {
        self.fields.get(name).map(String::as_str) == Some(value)
    }
}

struct FieldCollector {
    fields: BTreeMap<String, String>,
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

/// Layer that appends every event to a shared buffer
pub struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            events: events.clone(),
        };
        (layer, TestCapture { events })
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut collector = FieldCollector {
            fields: BTreeMap::new(),
        };
        event.record(&mut collector);

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message: collector.fields.get("message").cloned(),
            fields: collector.fields,
        };

        self.events
            .lock()
            .map(|mut events| events.push(captured))
            .ok();
    }
}

/// Handle for reading captured events in tests
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// All events captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Count events matching a predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }

    /// Assert that at least one event matches the predicate
    ///
    /// # Panics
    ///
    /// Panics with a summary of the captured events if none matches.
    pub fn assert_event<F>(&self, description: &str, predicate: F)
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        let events = self.events();
        assert!(
            events.iter().any(|e| predicate(e)),
            "expected event ({}) not found among {} captured events",
            description,
            events.len()
        );
    }

    /// Drop all captured events
    pub fn clear(&self) {
        self.events.lock().map(|mut e| e.clear()).ok();
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber and return the handle
///
/// The first call installs the subscriber; later calls return the same
/// shared handle. Use from integration tests that assert on log output.
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = CaptureLayer::new();
            tracing_subscriber::registry().with(layer).init();
            capture
        })
        .clone()
}
