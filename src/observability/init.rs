//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name attached to every span.
const SERVICE_NAME: &str = "Marquee";

/// File name of the span log inside the data directory.
pub const TRACE_FILE_NAME: &str = "marquee-spans.jsonl";

/// Installs the global subscriber: `EnvFilter` at `config.trace_level`,
/// bridged to OpenTelemetry, exported to
/// `~/.local/share/zellij/marquee/marquee-spans.jsonl`.
///
/// Observability is optional: if the data directory cannot be created the
/// plugin runs without tracing. Only the first call takes effect.
///
/// # Example
///
/// ```rust,no_run
/// use marquee::observability::init_tracing;
/// use marquee::Config;
///
/// let config = Config {
///     trace_level: "debug".to_string(),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(filter).with(otel_layer);

    let _ = subscriber.try_init();
}
