//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber, setting up the pipeline from
//! `tracing` macros to either the OpenTelemetry file export or stderr.

use super::exporter;
use crate::domain::error::{RecipeShelfError, Result};
use crate::infrastructure::expand_tilde;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name reported as `service.name` and used for the tracer.
pub const SERVICE_NAME: &str = "recipe-shelf";

/// Default filter directive when none is configured.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Initializes the global tracing subscriber.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters spans and events with `config.trace_level` (default `"info"`)
/// 2. Exports spans through OpenTelemetry to `config.trace_file` as JSON
///    lines, when a trace file is configured
/// 3. Formats events to stderr otherwise
///
/// Only the first successful call installs a subscriber; later calls leave it
/// in place.
///
/// # Errors
///
/// Returns [`RecipeShelfError::Config`] for an unparseable trace level and an
/// I/O error if the trace file cannot be created.
///
/// # Example
///
/// ```rust
/// use recipe_shelf::observability::init_tracing;
/// use recipe_shelf::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config)?;
///
/// tracing::debug!("tracing is now active");
/// # Ok::<(), recipe_shelf::RecipeShelfError>(())
/// ```
pub fn init_tracing(config: &Config) -> Result<()> {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| DEFAULT_TRACE_LEVEL.to_string());
    let filter = EnvFilter::try_new(&level)
        .map_err(|e| RecipeShelfError::Config(format!("invalid trace_level {level:?}: {e}")))?;

    let otel_layer = match &config.trace_file {
        Some(trace_file) => {
            let resource = Resource::new(vec![opentelemetry::KeyValue::new(
                "service.name",
                SERVICE_NAME,
            )]);
            let provider = exporter::create_tracer_provider(&expand_tilde(trace_file), resource)?;
            Some(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
        }
        None => None,
    };

    let fmt_layer = otel_layer
        .is_none()
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .with(fmt_layer);

    let _ = subscriber.try_init();
    Ok(())
}
