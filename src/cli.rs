//! Command-line interface of the binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, ConfigError};

#[derive(Parser, Debug)]
#[command(name = "catalog-console")]
#[command(about = "Product and user CRUD console with a built-in mock API")]
pub struct Cli {
    /// Config file (defaults to <config dir>/catalog-console/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the mock API server until Ctrl-C
    Serve(ServeArgs),
    /// Start the interactive console
    Console(ConsoleArgs),
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Bind address, e.g. 127.0.0.1:3000
    #[arg(long)]
    pub bind: Option<String>,

    /// Artificial latency per response, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Start with empty collections
    #[arg(long)]
    pub no_seed: bool,
}

#[derive(Args, Debug, Default)]
pub struct ConsoleArgs {
    /// API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Start a mock API server on an ephemeral port and use it
    #[arg(long, conflicts_with = "base_url")]
    pub embedded: bool,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        match &self.command {
            Commands::Serve(args) => {
                if let Some(bind) = &args.bind {
                    config.server.bind_addr = bind.clone();
                }
                if let Some(delay_ms) = args.delay_ms {
                    config.server.response_delay_ms = delay_ms;
                }
                if args.no_seed {
                    config.server.seed_fixtures = false;
                }
            }
            Commands::Console(args) => {
                if let Some(base_url) = &args.base_url {
                    config.api.base_url = base_url.clone();
                }
                if args.embedded {
                    config.server.bind_addr = "127.0.0.1:0".to_string();
                }
            }
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("catalog-console").chain(args.iter().copied())).unwrap()
    }

    fn missing_config(dir: &TempDir) -> String {
        dir.path().join("absent.toml").display().to_string()
    }

    #[test]
    fn serve_flags_override_config() {
        let dir = TempDir::new().unwrap();
        let cli = parse(&[
            "--config",
            &missing_config(&dir),
            "serve",
            "--bind",
            "0.0.0.0:4000",
            "--delay-ms",
            "250",
            "--no-seed",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0:4000");
        assert_eq!(config.server.response_delay_ms, 250);
        assert!(!config.server.seed_fixtures);
    }

    #[test]
    fn console_base_url_is_validated() {
        let dir = TempDir::new().unwrap();
        let cli = parse(&["console", "--base-url", "ftp://example.com", "--config", &missing_config(&dir)]);
        assert!(matches!(
            cli.resolve_config(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn embedded_conflicts_with_base_url() {
        let result = Cli::try_parse_from([
            "catalog-console",
            "console",
            "--embedded",
            "--base-url",
            "http://127.0.0.1:1",
        ]);
        assert!(result.is_err());
    }
}
