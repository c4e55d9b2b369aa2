use std::{
    env,
    net::{IpAddr, SocketAddr},
    path::Path,
    time::Duration,
};

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
///
/// Contains all configuration settings for the library service,
/// including server and tracing settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Distribution metadata configuration
    pub distribution: DistributionConfig,
    /// Server configuration settings
    pub server: ServerConfig,
    /// Tracing configuration
    pub tracing: TracingConfig,
}

/// Server configuration settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address both front-ends bind to
    pub host: IpAddr,
    /// RPC server port
    pub grpc_port: u16,
    /// HTTP gateway port
    pub gateway_port: u16,
    /// Seconds to wait after a shutdown signal before exiting
    pub shutdown_grace_secs: u64,
}

/// Tracing configuration.
///
/// Controls how tracing data is output from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind")]
pub enum TracingConfig {
    /// Compact log output, spans are not exported
    Memory,
    /// Pretty log output with spans exported to standard output
    Stdout,
}

/// Distribution metadata configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DistributionConfig {
    /// Distribution name
    pub name: String,
    /// Distribution version
    pub version: Option<String>,
}

const CONFIG_PATH_ENV: &str = "LIBRARY_CONFIG_PATH";
const ENV_PREFIX: &str = "LIBRARY";
const VERSION: &str = env!("CARGO_PKG_VERSION");

// Plain port variables read by existing deployments.
const GRPC_PORT_ENV: &str = "GRPC_PORT";
const GRPC_GATEWAY_PORT_ENV: &str = "GRPC_GATEWAY_PORT";

const SERVER_GRPC_PORT_KEY: &str = "server.grpc_port";
const SERVER_GATEWAY_PORT_KEY: &str = "server.gateway_port";

impl AppConfig {
    /// Loads configuration from files and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load() -> AppResult<Self> {
        let config_path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config".to_string());
        let config_path = Path::new(&config_path);

        let mut config_builder = Self::default_builder()?;

        // Initial "default" configuration file
        config_builder =
            config_builder.add_source(File::from(config_path.join("default")).required(false));

        // Add in a local configuration file
        // This file shouldn't be checked in to git
        config_builder =
            config_builder.add_source(File::from(config_path.join("local")).required(false));

        // Add in settings from the environment (with a prefix of LIBRARY)
        config_builder =
            config_builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        config_builder = config_builder
            .set_override_option(SERVER_GRPC_PORT_KEY, env::var(GRPC_PORT_ENV).ok())?
            .set_override_option(SERVER_GATEWAY_PORT_KEY, env::var(GRPC_GATEWAY_PORT_ENV).ok())?;

        Self::build(config_builder)
    }

    /// Creates a builder populated with every default value.
    ///
    /// # Errors
    ///
    /// Returns an error if a default cannot be set.
    pub fn default_builder() -> AppResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("distribution.name", "library-service")?
            .set_default("distribution.version", VERSION)?
            .set_default("server.host", "0.0.0.0")?
            .set_default(SERVER_GRPC_PORT_KEY, 50051)?
            .set_default(SERVER_GATEWAY_PORT_KEY, 8080)?
            .set_default("server.shutdown_grace_secs", 3)?
            .set_default("tracing.kind", "Stdout")?)
    }

    /// Builds and deserializes the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or values do not match.
    pub fn build(config_builder: ConfigBuilder<DefaultState>) -> AppResult<Self> {
        Ok(config_builder.build()?.try_deserialize()?)
    }
}

impl ServerConfig {
    pub fn grpc_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.grpc_port)
    }

    pub fn gateway_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.gateway_port)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::build(AppConfig::default_builder().unwrap()).unwrap();
        assert_eq!(config.distribution.name, "library-service");
        assert_eq!(config.distribution.version.as_deref(), Some(VERSION));
        assert_eq!(
            config.server.grpc_address(),
            "0.0.0.0:50051".parse::<SocketAddr>().unwrap(),
        );
        assert_eq!(
            config.server.gateway_address(),
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap(),
        );
        assert_eq!(config.server.shutdown_grace(), Duration::from_secs(3));
        assert_eq!(config.tracing, TracingConfig::Stdout);
    }

    #[test]
    fn overrides() {
        let config_builder = AppConfig::default_builder()
            .unwrap()
            .add_source(File::from_str(
                r#"
                    [server]
                    host = "127.0.0.1"
                    gateway_port = 9090

                    [tracing]
                    kind = "Memory"
                "#,
                FileFormat::Toml,
            ))
            .set_override_option(SERVER_GRPC_PORT_KEY, Some("6000"))
            .unwrap();
        let config = AppConfig::build(config_builder).unwrap();

        assert_eq!(
            config.server.grpc_address(),
            "127.0.0.1:6000".parse::<SocketAddr>().unwrap(),
        );
        assert_eq!(
            config.server.gateway_address(),
            "127.0.0.1:9090".parse::<SocketAddr>().unwrap(),
        );
        assert_eq!(config.tracing, TracingConfig::Memory);
    }

    #[test]
    fn invalid_port() {
        let config_builder = AppConfig::default_builder()
            .unwrap()
            .set_override(SERVER_GRPC_PORT_KEY, "not a port")
            .unwrap();
        assert!(AppConfig::build(config_builder).is_err());
    }
}
