use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use verdict_core::{DEFAULT_LOG_FILTER, VERDICT_LOG_VAR};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, span, trace, warn, Level, Span};

/// Initialize the tracing system
///
/// Reads the filter from `VERDICT_LOG` (falling back to `info`) and writes
/// compact, uncoloured events to stderr. Fails if a global subscriber is
/// already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = env_filter()?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Build the event filter from `VERDICT_LOG`, defaulting to `info`
pub fn env_filter() -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    match std::env::var(VERDICT_LOG_VAR) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives),
        _ => EnvFilter::try_new(DEFAULT_LOG_FILTER),
    }
}

/// Create a span for a described safe execution
pub fn execution_span(description: &str) -> Span {
    span!(Level::INFO, "execution", description = %description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_filter_defaults_to_info() {
        std::env::remove_var(VERDICT_LOG_VAR);
        assert_eq!(
            env_filter().unwrap().to_string().to_lowercase(),
            DEFAULT_LOG_FILTER
        );
    }

    #[test]
    #[serial]
    fn test_env_filter_reads_directives() {
        std::env::set_var(VERDICT_LOG_VAR, "verdict_utils=debug");
        let filter = env_filter().unwrap();
        std::env::remove_var(VERDICT_LOG_VAR);
        assert!(filter.to_string().starts_with("verdict_utils="));
    }

    #[test]
    #[serial]
    fn test_env_filter_rejects_garbage() {
        std::env::set_var(VERDICT_LOG_VAR, "verdict_utils=loud");
        let result = env_filter();
        std::env::remove_var(VERDICT_LOG_VAR);
        assert!(result.is_err());
    }

    #[test]
    fn test_execution_span_metadata() {
        let span = execution_span("load config");
        if let Some(metadata) = span.metadata() {
            assert_eq!(metadata.name(), "execution");
            assert!(metadata.fields().field("description").is_some());
        }
    }
}
