//! OpenTelemetry tracer provider with JSON-lines file export.
//!
//! Each finished span is written as one JSON object per line, so a trace file
//! can be inspected with ordinary line tools while a view is running.

use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::Value;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{Map, Value as JsonValue};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::SystemTime;

/// Span exporter appending one JSON line per span to a file.
#[derive(Debug)]
struct JsonLinesExporter {
    file: Mutex<File>,
    service_name: String,
    is_shutdown: AtomicBool,
}

impl JsonLinesExporter {
    fn open(path: &Path, resource: &Resource) -> io::Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        let service_name = resource
            .get(opentelemetry::Key::from_static_str("service.name"))
            .map_or_else(|| "unknown".to_string(), |v| v.to_string());

        Ok(Self {
            file: Mutex::new(file),
            service_name,
            is_shutdown: AtomicBool::new(false),
        })
    }

    fn write_batch(&self, batch: &[SpanData]) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        for span in batch {
            let line = span_record(span, &self.service_name);
            writeln!(file, "{line}")?;
        }
        file.flush()
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let result = self
            .write_batch(&batch)
            .map_err(|e| TraceError::from(e.to_string()));
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

/// Formats one span as a flat JSON object.
///
/// ```json
/// {"service":"recipe-shelf","name":"handle_event","traceId":"…","spanId":"…",
///  "parentSpanId":null,"start":"2026-01-01T00:00:00+00:00","durationMicros":12,
///  "attributes":{"event_type":"Search(\"toast\")"},"status":"unset"}
/// ```
fn span_record(span: &SpanData, service_name: &str) -> JsonValue {
    let attributes: Map<String, JsonValue> = span
        .attributes
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect();

    let parent = (span.parent_span_id != SpanId::INVALID)
        .then(|| format!("{:016x}", span.parent_span_id));

    let duration_micros = span
        .end_time
        .duration_since(span.start_time)
        .map_or(0, |d| d.as_micros());

    let status = match &span.status {
        Status::Unset => "unset".to_string(),
        Status::Ok => "ok".to_string(),
        Status::Error { description } => format!("error: {description}"),
    };

    serde_json::json!({
        "service": service_name,
        "name": span.name,
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "start": rfc3339(span.start_time),
        "durationMicros": u64::try_from(duration_micros).unwrap_or(u64::MAX),
        "attributes": attributes,
        "status": status,
    })
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::from(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => JsonValue::from(*f),
        Value::String(s) => JsonValue::from(s.as_str()),
        Value::Array(_) => JsonValue::from(value.to_string()),
    }
}

fn rfc3339(time: SystemTime) -> String {
    chrono::DateTime::<chrono::Utc>::from(time).to_rfc3339()
}

/// Creates a tracer provider exporting every span to `path` as it ends.
///
/// # Errors
///
/// Returns an error if the trace file or its directory cannot be created.
pub fn create_tracer_provider(path: &Path, resource: Resource) -> io::Result<TracerProvider> {
    let exporter = JsonLinesExporter::open(path, &resource)?;

    Ok(TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build())
}
