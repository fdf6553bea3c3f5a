//! Tracing subscriber setup.
//!
//! With the `observability` feature, spans are also bridged to OpenTelemetry
//! and exported to stdout.

use crate::LoggingConfig;
use std::env;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Subscriber settings resolved from configuration and command-line flags.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Service name for telemetry attribution
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Enable JSON-formatted logs
    pub json_logs: bool,
    /// Use `log_level` even when `RUST_LOG` is set
    pub override_env: bool,
}

impl ObservabilityConfig {
    /// Create a new configuration with the given service name.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            override_env: false,
        }
    }

    /// Settings from the `[logging]` section.
    ///
    /// `verbose` forces debug, overriding both the section and `RUST_LOG`.
    pub fn from_logging(logging: &LoggingConfig, verbose: bool) -> Self {
        let config = Self::default().with_json_logs(logging.json);
        if verbose {
            config.with_log_level("debug").with_override_env(true)
        } else {
            config.with_log_level(logging.level.clone())
        }
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    /// Prefer `log_level` over `RUST_LOG`.
    pub fn with_override_env(mut self, enabled: bool) -> Self {
        self.override_env = enabled;
        self
    }

    /// The filter directive in effect: `RUST_LOG` when set and not overridden,
    /// else the configured level.
    pub fn filter_directive(&self) -> String {
        if self.override_env {
            return self.log_level.clone();
        }
        env::var("RUST_LOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| self.log_level.clone())
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

/// Installs the global subscriber.
///
/// This sets up:
/// - An env filter (`RUST_LOG`, falling back to the configured level; `--verbose` wins)
/// - A plain or JSON fmt layer on stderr
/// - With the `observability` feature, an OpenTelemetry stdout span exporter
///
/// # Errors
///
/// Returns an error if the filter does not parse or a subscriber is already installed.
pub fn init_observability(config: &ObservabilityConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_new(config.filter_directive())?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .boxed()
    };

    let registry = tracing_subscriber::registry().with(env_filter).with(fmt_layer);

    #[cfg(feature = "observability")]
    {
        use opentelemetry::{KeyValue, global, trace::TracerProvider};
        use opentelemetry_sdk::{Resource, trace::SdkTracerProvider};
        use opentelemetry_stdout::SpanExporter;

        let resource = Resource::builder()
            .with_service_name(config.service_name.clone())
            .with_attributes(vec![KeyValue::new(
                "service.version",
                config.service_version.clone(),
            )])
            .build();

        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(SpanExporter::default())
            .with_resource(resource)
            .build();

        global::set_tracer_provider(provider.clone());

        let tracer = provider.tracer(config.service_name.clone());
        let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);

        registry.with(otel_layer).try_init()?;
    }

    #[cfg(not(feature = "observability"))]
    registry.try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_forces_debug() {
        let logging = LoggingConfig {
            level: "warn".to_string(),
            json: true,
        };
        let config = ObservabilityConfig::from_logging(&logging, true);
        assert_eq!(config.log_level, "debug");
        assert!(config.json_logs);
    }

    #[test]
    fn test_verbose_wins_over_rust_log() {
        // Holds whatever RUST_LOG the test runner was started with
        let config = ObservabilityConfig::from_logging(&LoggingConfig::default(), true);
        assert!(config.override_env);
        assert_eq!(config.filter_directive(), "debug");
    }

    #[test]
    fn test_configured_level_defers_to_rust_log() {
        let config = ObservabilityConfig::from_logging(&LoggingConfig::default(), false);
        assert!(!config.override_env);
        let expected = env::var("RUST_LOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());
        assert_eq!(config.filter_directive(), expected);
    }

    #[test]
    fn test_configured_level_without_verbose() {
        let config = ObservabilityConfig::from_logging(&LoggingConfig::default(), false);
        assert_eq!(config.log_level, "info");
        assert!(!config.json_logs);
        assert_eq!(config.service_name, "storyforge");
    }
}
