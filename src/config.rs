use anyhow::{Context, Result};
use config::{Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    /// Defaults, then an optional `museo.toml`, then the process environment
    /// (`DATABASE_URL`, `SERVER_HOST`, `SERVER_PORT`).
    pub fn from_env() -> Result<Self> {
        config::Config::builder()
            .set_default("server_host", "0.0.0.0")?
            .set_default("server_port", 3000)?
            .add_source(File::with_name("museo").required(false))
            .add_source(Environment::default().try_parsing(true))
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("DATABASE_URL must be set and SERVER_PORT must be a valid port number")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = Config {
            database_url: "sqlite::memory:".into(),
            server_host: "127.0.0.1".into(),
            server_port: 8080,
        };
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
