use std::error::Error;

use opentelemetry::{KeyValue, global, trace::TracerProvider};
use opentelemetry_sdk::{
    Resource,
    propagation::TraceContextPropagator,
    trace::{SdkTracer, SdkTracerProvider, SpanExporter},
};
use tracing::Subscriber;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{EnvFilter, fmt::format::Format, prelude::*, registry::LookupSpan};

use crate::config::{AppConfig, TracingConfig};

const DEFAULT_FILTER: &str = "info";

/// Tracer configuration and initialization.
///
/// Handles setting up logging and span export for the library service.
pub struct Tracer;

impl Tracer {
    /// Installs the tracer selected by the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if tracer initialization fails.
    pub fn install(config: &AppConfig) -> Result<(), Box<dyn Error + Send + Sync>> {
        match config.tracing {
            TracingConfig::Memory => Self::install_memory(),
            TracingConfig::Stdout => Self::install_stdout(config),
        }
    }

    /// Installs stdout tracing with OpenTelemetry.
    ///
    /// # Errors
    ///
    /// Returns an error if tracer initialization fails.
    pub fn install_stdout(config: &AppConfig) -> Result<(), Box<dyn Error + Send + Sync>> {
        global::set_text_map_propagator(TraceContextPropagator::new());

        let provider = Self::provider(config, opentelemetry_stdout::SpanExporter::default());
        let otel_layer = Self::layer(&provider, config);
        global::set_tracer_provider(provider);

        let fmt_layer = tracing_subscriber::fmt::layer()
            .event_format(Format::default().pretty())
            .with_filter(env_filter());

        tracing_subscriber::registry()
            .with(otel_layer.with_filter(env_filter()))
            .with(fmt_layer)
            .try_init()?;

        Ok(())
    }

    /// Installs compact log output without span export.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already set.
    pub fn install_memory() -> Result<(), Box<dyn Error + Send + Sync>> {
        let layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_filter(env_filter());

        tracing_subscriber::registry().with(layer).try_init()?;

        Ok(())
    }

    /// Builds a tracer provider exporting finished spans to `exporter`.
    pub fn provider<E>(config: &AppConfig, exporter: E) -> SdkTracerProvider
    where
        E: SpanExporter + 'static,
    {
        let mut resource = Resource::builder().with_service_name(config.distribution.name.clone());
        if let Some(version) = config.distribution.version.clone() {
            resource = resource.with_attribute(KeyValue::new("version", version));
        }

        SdkTracerProvider::builder()
            .with_resource(resource.build())
            .with_simple_exporter(exporter)
            .build()
    }

    /// Creates the layer forwarding `tracing` spans to the provider.
    pub fn layer<S>(
        provider: &SdkTracerProvider,
        config: &AppConfig,
    ) -> OpenTelemetryLayer<S, SdkTracer>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        let tracer = provider.tracer(config.distribution.name.clone());
        tracing_opentelemetry::layer().with_tracer(tracer)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
