//! Recording layer utilities for capturing spans and events in tests.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard},
};

use ::tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
    span::{Attributes, Id, Record},
};
use tracing_subscriber::{
    Layer,
    layer::{Context, SubscriberExt},
    registry::LookupSpan,
};

/// Layer that keeps closed spans and emitted events so tests can assert on
/// instrumentation after the fact.
///
/// # Examples
/// ```
/// use graphe_test_support::tracing::RecordingLayer;
///
/// let (value, layer) = RecordingLayer::capture(|| {
///     tracing::info!(links = 3, "graph generated");
///     7
/// });
/// assert_eq!(value, 7);
/// assert!(layer.has_event(tracing::Level::INFO, "graph generated"));
/// ```
#[derive(Clone, Default)]
pub struct RecordingLayer {
    spans: Arc<Mutex<Vec<SpanRecord>>>,
    events: Arc<Mutex<Vec<EventRecord>>>,
}

impl RecordingLayer {
    /// Runs `action` with a fresh layer installed as the thread-default
    /// subscriber and returns its result together with the layer.
    pub fn capture<T>(action: impl FnOnce() -> T) -> (T, Self) {
        let layer = Self::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        let value = ::tracing::subscriber::with_default(subscriber, action);
        (value, layer)
    }

    /// Closed spans in completion order.
    ///
    /// # Examples
    /// ```
    /// use graphe_test_support::tracing::RecordingLayer;
    ///
    /// let layer = RecordingLayer::default();
    /// assert!(layer.spans().is_empty());
    /// ```
    #[must_use]
    pub fn spans(&self) -> Vec<SpanRecord> {
        lock(&self.spans).clone()
    }

    /// Emitted events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        lock(&self.events).clone()
    }

    /// The first closed span called `name`, if any.
    #[must_use]
    pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
        lock(&self.spans)
            .iter()
            .find(|span| span.name == name)
            .cloned()
    }

    /// Returns `true` when an event at `level` carried `message`.
    #[must_use]
    pub fn has_event(&self, level: Level, message: &str) -> bool {
        lock(&self.events)
            .iter()
            .any(|event| event.level == level && event.message() == Some(message))
    }
}

fn lock<T>(records: &Mutex<Vec<T>>) -> MutexGuard<'_, Vec<T>> {
    records
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// A closed span with the fields recorded against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanRecord {
    /// Span name from the tracing metadata.
    pub name: String,
    /// Fields recorded at creation or later through `Span::record`.
    pub fields: HashMap<String, String>,
}

impl SpanRecord {
    /// The recorded value of `field`, if any.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

/// An emitted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Level of the event.
    pub level: Level,
    /// Event target, usually the emitting module path.
    pub target: String,
    /// Structured fields, including `message`.
    pub fields: HashMap<String, String>,
}

impl EventRecord {
    /// The event's message, if it had one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.fields.get("message").map(String::as_str)
    }
}

struct OpenSpan {
    name: String,
    fields: HashMap<String, String>,
}

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut open = OpenSpan {
            name: attrs.metadata().name().to_owned(),
            fields: HashMap::new(),
        };
        attrs.record(&mut FieldRecorder(&mut open.fields));
        span.extensions_mut().insert(open);
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut extensions = span.extensions_mut();
        if let Some(open) = extensions.get_mut::<OpenSpan>() {
            values.record(&mut FieldRecorder(&mut open.fields));
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        let Some(open) = span.extensions_mut().remove::<OpenSpan>() else {
            return;
        };
        lock(&self.spans).push(SpanRecord {
            name: open.name,
            fields: open.fields,
        });
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldRecorder(&mut fields));
        lock(&self.events).push(EventRecord {
            level: *event.metadata().level(),
            target: event.metadata().target().to_owned(),
            fields,
        });
    }
}

struct FieldRecorder<'a>(&'a mut HashMap<String, String>);

impl FieldRecorder<'_> {
    fn insert(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_owned(), value);
    }
}

impl Visit for FieldRecorder<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value.to_owned());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use ::tracing::{Level, info_span, warn};
    use rstest::rstest;

    use super::RecordingLayer;

    #[rstest]
    fn records_span_fields_including_late_ones() {
        let ((), layer) = RecordingLayer::capture(|| {
            let span = info_span!("cli.run", command = ::tracing::field::Empty, vertices = 4_u64);
            span.record("command", "show");
        });
        let span = layer.span_named("cli.run").expect("span must be recorded");
        assert_eq!(span.field("command"), Some("show"));
        assert_eq!(span.field("vertices"), Some("4"));
    }

    #[rstest]
    fn records_event_level_and_message() {
        let ((), layer) = RecordingLayer::capture(|| warn!(source = 3_u64, "link not found"));
        assert!(layer.has_event(Level::WARN, "link not found"));
        assert!(!layer.has_event(Level::INFO, "link not found"));
        let events = layer.events();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events.first().and_then(|event| event.fields.get("source")),
            Some(&"3".to_owned())
        );
    }

    #[rstest]
    fn layers_do_not_share_records() {
        let ((), first) = RecordingLayer::capture(|| warn!("first"));
        let ((), second) = RecordingLayer::capture(|| warn!("second"));
        assert!(first.has_event(Level::WARN, "first"));
        assert!(!second.has_event(Level::WARN, "first"));
    }
}
