//! JSON Lines span formatter.
//!
//! Converts finished OpenTelemetry spans into flat JSON records, one per span,
//! so the trace file can be read with `jq` or any line-oriented tool. Timestamps
//! are RFC 3339 strings in UTC.

use chrono::{DateTime, SecondsFormat, Utc};
use opentelemetry::trace::{SpanId, Status};
use opentelemetry::{Key, KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{Map, Value as JsonValue};
use std::time::SystemTime;

/// Formats spans as single-line JSON records.
pub struct SpanFormatter {
    /// Value of the `service.name` resource attribute.
    service: String,
}

impl SpanFormatter {
    /// Creates a formatter tagging records with the resource's service name.
    pub fn new(resource: &Resource) -> Self {
        let service = resource
            .get(Key::new("service.name"))
            .map_or_else(|| "unknown".to_string(), |v| v.as_str().into_owned());
        Self { service }
    }

    /// Formats one span.
    ///
    /// # Record Format
    ///
    /// ```json
    /// {
    ///   "timestamp": "2024-05-01T10:00:00.000123Z",
    ///   "end": "2024-05-01T10:00:00.000456Z",
    ///   "duration_us": 333,
    ///   "service": "dirpicker",
    ///   "name": "handle_event",
    ///   "trace_id": "…", "span_id": "…", "parent_span_id": null,
    ///   "attributes": {"event_type": "KeyDown"},
    ///   "events": [{"timestamp": "…", "name": "search match applied", "attributes": {}}],
    ///   "status": "unset"
    /// }
    /// ```
    pub fn format_span(&self, span: &SpanData) -> JsonValue {
        let duration_us = span
            .end_time
            .duration_since(span.start_time)
            .map_or(0, |d| u64::try_from(d.as_micros()).unwrap_or(u64::MAX));

        let parent = (span.parent_span_id != SpanId::INVALID)
            .then(|| format!("{:016x}", span.parent_span_id));

        let events: Vec<JsonValue> = span
            .events
            .iter()
            .map(|event| {
                serde_json::json!({
                    "timestamp": rfc3339(event.timestamp),
                    "name": event.name,
                    "attributes": attributes(&event.attributes),
                })
            })
            .collect();

        serde_json::json!({
            "timestamp": rfc3339(span.start_time),
            "end": rfc3339(span.end_time),
            "duration_us": duration_us,
            "service": self.service,
            "name": span.name,
            "trace_id": format!("{:032x}", span.span_context.trace_id()),
            "span_id": format!("{:016x}", span.span_context.span_id()),
            "parent_span_id": parent,
            "attributes": attributes(&span.attributes),
            "events": events,
            "status": status(&span.status),
        })
    }
}

fn rfc3339(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn attributes(attributes: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = attributes
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => JsonValue::from(*f),
        Value::String(s) => JsonValue::String(s.to_string()),
        Value::Array(_) => JsonValue::String(value.as_str().into_owned()),
    }
}

fn status(status: &Status) -> JsonValue {
    match status {
        Status::Unset => JsonValue::from("unset"),
        Status::Ok => JsonValue::from("ok"),
        Status::Error { description } => serde_json::json!({ "error": description.to_string() }),
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter")
            .field("service", &self.service)
            .finish()
    }
}
