//! Global tracing subscribers for the store and the form

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer,
};

use crate::config::{LogFormat, LoggingConfig};

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// `RUST_LOG` wins over the configured level; an unusable level falls back to `info`
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Output layer for the store: one JSON object per event, or multi-line pretty text
fn store_layer<S>(format: &LogFormat) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_events(FmtSpan::CLOSE)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_span_events(FmtSpan::CLOSE)
            .boxed(),
    }
}

/// Output layer for the form: compact lines on stderr so they never mix with the table
fn form_layer<S>() -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .compact()
        .without_time()
        .with_writer(std::io::stderr)
        .boxed()
}

/// Install the store's global subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(store_layer(&config.format))
        .try_init()?;

    tracing::info!(level = %config.level, format = ?config.format, "Logging initialized");
    Ok(())
}

/// Install the form's global subscriber
pub fn init_form_logging(config: &LoggingConfig) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(form_layer())
        .try_init()
}
