use std::env;
use std::net::{IpAddr, SocketAddr};

use clap::Parser;

use crate::domain::entities::DEFAULT_LOAD_LIMIT;

/// Command-line flags; these override the environment
#[derive(Debug, Default, Parser)]
#[command(name = "mini-crm", version, about = "Mini-CRM lead distribution service")]
pub struct Cli {
    /// Interface to bind
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Database connection string (sqlite:// or postgres://)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    /// Load limit applied when an operator is created without one
    pub default_load_limit: i32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = match env::var("HOST") {
            Ok(h) => h
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid HOST '{}': {}", h, e))?,
            Err(_) => IpAddr::from([0, 0, 0, 0]),
        };
        let port = match env::var("PORT") {
            Ok(p) => p
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid PORT '{}': {}", p, e))?,
            Err(_) => 8000,
        };
        let default_load_limit = match env::var("DEFAULT_LOAD_LIMIT") {
            Ok(v) => v
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid DEFAULT_LOAD_LIMIT '{}': {}", v, e))?,
            Err(_) => DEFAULT_LOAD_LIMIT,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://mini_crm.db?mode=rwc".to_string()),
            host,
            port,
            default_load_limit,
        })
    }

    /// Apply command-line overrides on top of the environment
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if let Some(host) = cli.host {
            self.host = host;
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(url) = cli.database_url {
            self.database_url = url;
        }
        self
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8000,
            default_load_limit: 10,
        }
    }

    #[test]
    fn cli_flags_override_environment() {
        let cli = Cli::parse_from(["mini-crm", "--host", "127.0.0.1", "--port", "9000"]);
        let config = base().with_cli(cli);
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn missing_flags_keep_defaults() {
        let config = base().with_cli(Cli::default());
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8000");
    }
}
