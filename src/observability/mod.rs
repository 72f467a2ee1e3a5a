//! OpenTelemetry-based observability with file-based trace export.
//!
//! The picker owns the terminal while it runs, so diagnostics never go to the
//! screen. Spans are exported through OpenTelemetry to a JSON Lines file
//! instead:
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON Lines
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: `<data_local_dir>/dirpicker/dirpicker-trace.jsonl`
//!   (`~/.local/share/dirpicker/` on Linux)
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Flat Records**: one JSON object per span with RFC 3339 timestamps
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: Span to JSON conversion
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
