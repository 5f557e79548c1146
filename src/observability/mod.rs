//! OpenTelemetry-based observability with file-based trace export.
//!
//! # Architecture
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → JsonLinesExporter → file
//! tracing → tracing-subscriber fmt → stderr            (no trace file configured)
//! ```
//!
//! # Configuration
//!
//! - `trace_level`: filter directive, default `"info"`
//! - `trace_file`: JSON-lines span file; `~/` is expanded
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`exporter`]: Tracer provider with a JSON-lines span exporter

mod exporter;
mod init;

pub use exporter::create_tracer_provider;
pub use init::{init_tracing, DEFAULT_TRACE_LEVEL, SERVICE_NAME};
