use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub downstream: DownstreamConfig,
    pub inventory: CollaboratorConfig,
    pub payment: CollaboratorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DownstreamConfig {
    /// Fixed per-call timeout for collaborator requests, in seconds.
    pub timeout_seconds: u64,
}

/// Address book entry for one collaborator: where the orchestrator reaches
/// it, and which port its simulator binary listens on.
#[derive(Debug, Deserialize, Clone)]
pub struct CollaboratorConfig {
    pub base_url: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    /// External log-sink address. Parsed at startup and logged; shipping
    /// itself is handled outside this process.
    pub sink_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("server.port", 8080)?
            .set_default("downstream.timeout_seconds", 10)?
            .set_default("inventory.base_url", "http://localhost:8081")?
            .set_default("inventory.port", 8081)?
            .set_default("payment.base_url", "http://localhost:8082")?
            .set_default("payment.port", 8082)?
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file, not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of ORDEX)
            // Eg.. `ORDEX__SERVER__PORT=9090` would set the server port
            .add_source(config::Environment::with_prefix("ORDEX").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_whole_config() {
        let config = Config::load().expect("defaults should satisfy every field");
        assert_eq!(config.downstream.timeout_seconds, 10);
        assert_eq!(config.inventory.base_url, "http://localhost:8081");
        assert_eq!(config.payment.port, 8082);
        assert!(config.logging.sink_url.is_none());
    }
}
