//! Command-line and server configuration.

use clap::Parser;

use crate::config::{Config, DEFAULT_PAGE_LIMIT, DEFAULT_RECORD_COUNT};

/// CLI arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "logs-mock")]
#[command(about = "Mock log-query API with cursor pagination")]
pub struct CliArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8000, env = "LOGS_MOCK_PORT")]
    pub port: u16,

    /// Number of log records to generate at startup
    #[arg(short, long, default_value_t = DEFAULT_RECORD_COUNT, env = "LOGS_MOCK_RECORDS")]
    pub records: usize,

    /// Seed for record generation (random when omitted)
    #[arg(short, long, env = "LOGS_MOCK_SEED")]
    pub seed: Option<u64>,

    /// Page size used when a request does not pass `limit`
    #[arg(
        long,
        default_value_t = DEFAULT_PAGE_LIMIT,
        env = "LOGS_MOCK_DEFAULT_LIMIT",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub default_limit: usize,
}

impl CliArgs {
    /// Build the corpus generation config.
    pub fn to_store_config(&self) -> Config {
        Config {
            record_count: self.records,
            seed: self.seed,
            ..Default::default()
        }
    }
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct LogServerConfig {
    pub port: u16,
    pub default_limit: usize,
}

impl Default for LogServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            default_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl From<&CliArgs> for LogServerConfig {
    fn from(args: &CliArgs) -> Self {
        Self {
            port: args.port,
            default_limit: args.default_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_without_flags() {
        // given/when
        let args = CliArgs::try_parse_from(["logs-mock"]).unwrap();

        // then
        assert_eq!(args.records, 10_000);
        assert_eq!(args.default_limit, 100);
        assert!(args.seed.is_none());
    }

    #[test]
    fn should_parse_flags_into_configs() {
        // given
        let args = CliArgs::try_parse_from([
            "logs-mock",
            "--port",
            "9000",
            "--records",
            "250",
            "--seed",
            "7",
            "--default-limit",
            "25",
        ])
        .unwrap();

        // when
        let store_config = args.to_store_config();
        let server_config = LogServerConfig::from(&args);

        // then
        assert_eq!(store_config.record_count, 250);
        assert_eq!(store_config.seed, Some(7));
        assert_eq!(server_config.port, 9000);
        assert_eq!(server_config.default_limit, 25);
    }

    #[test]
    fn should_reject_zero_default_limit() {
        // given/when
        let result = CliArgs::try_parse_from(["logs-mock", "--default-limit", "0"]);

        // then
        assert!(result.is_err());
    }
}
