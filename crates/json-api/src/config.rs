//! Server configuration module

use std::time::Duration;

use clap::{Args, Parser};
use storefront_app::domain::payments::{SettlementOutcome, SettlementPolicy};

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Payment settlement simulation settings.
    #[command(flatten)]
    pub settlement: SettlementConfig,
}

/// Server runtime network settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value = "3000")]
    pub port: u16,
}

/// Logging output settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Payment settlement simulation settings.
#[derive(Debug, Args)]
pub struct SettlementConfig {
    /// How long a submitted payment stays in processing, in milliseconds
    #[arg(long, env = "SETTLEMENT_DELAY_MS", default_value = "2000")]
    pub settlement_delay_ms: u64,

    /// Fraction of payments that settle as failed, between 0.0 and 1.0
    #[arg(long, env = "SETTLEMENT_FAILURE_RATE", default_value = "0.1")]
    pub settlement_failure_rate: f64,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// The settlement policy the payments service should run with
    #[must_use]
    pub fn settlement_policy(&self) -> SettlementPolicy {
        SettlementPolicy {
            delay: Duration::from_millis(self.settlement.settlement_delay_ms),
            outcome: SettlementOutcome::Random {
                failure_rate: self.settlement.settlement_failure_rate.clamp(0.0, 1.0),
            },
        }
    }
}
