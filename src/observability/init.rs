//! Tracing initialization and subscriber setup.
//!
//! Wires the pipeline from `tracing` macros to the trace file:
//!
//! ```text
//! tracing → EnvFilter → tracing-opentelemetry → TracerProvider → FileSpanExporter
//! ```

use super::tracer;
use crate::infrastructure::data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name recorded on every span.
pub const SERVICE_NAME: &str = "dirpicker";

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "dirpicker-trace.jsonl";

/// Installs the global tracing subscriber.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set
/// 2. `RUST_LOG` if set and valid
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if there is no data directory or it cannot be
///   created, since tracing is optional
/// - Only the first call takes effect
///
/// Nothing is ever written to the terminal.
pub fn init_tracing(config: &Config) {
    let filter = match &config.trace_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let Some(dir) = data_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(dir.join(TRACE_FILE_NAME), resource);

    let tracer = provider.tracer(SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry().with(filter).with(otel_layer);

    let _ = subscriber.try_init();
}
