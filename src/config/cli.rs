use crate::config::toml_config::TomlConfig;
use crate::config::{ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::validate_path;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "receipt-points")]
#[command(about = "Stores purchase receipts and scores them for reward points")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP service
    Serve(ServeArgs),
    /// Score a receipt JSON file without starting the service
    Score(ScoreArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct ServeArgs {
    #[arg(long, help = "Address to bind (default 127.0.0.1)")]
    pub host: Option<String>,

    #[arg(long, short, help = "Port to listen on (default 8080)")]
    pub port: Option<u16>,

    #[arg(long, short, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ScoreArgs {
    #[arg(help = "Receipt JSON file, or - for stdin")]
    pub file: String,
}

impl ServeArgs {
    /// Flags win over the config file, which wins over defaults.
    pub fn resolve(&self) -> Result<ServerConfig> {
        let file = match &self.config {
            Some(path) => {
                validate_path("config", &path.to_string_lossy())?;
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        Ok(self.merge(file))
    }

    pub fn merge(&self, file: TomlConfig) -> ServerConfig {
        let log_format = if self.json_logs {
            LogFormat::Json
        } else {
            file.logging.format.unwrap_or_default()
        };

        ServerConfig {
            host: self
                .host
                .clone()
                .or(file.server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self.port.or(file.server.port).unwrap_or(DEFAULT_PORT),
            log_level: file.logging.level,
            log_format,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::{LoggingSection, ServerSection};

    fn file_config() -> TomlConfig {
        TomlConfig {
            server: ServerSection {
                host: Some("0.0.0.0".to_string()),
                port: Some(9000),
            },
            logging: LoggingSection {
                level: Some("warn".to_string()),
                format: Some(LogFormat::Json),
            },
        }
    }

    #[test]
    fn test_defaults_without_flags_or_file() {
        let config = ServeArgs::default().merge(TomlConfig::default());
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_file_fills_unset_flags() {
        let config = ServeArgs::default().merge(file_config());
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.log_level.as_deref(), Some("warn"));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_flags_override_file() {
        let args = ServeArgs {
            port: Some(8181),
            ..ServeArgs::default()
        };
        let config = args.merge(file_config());
        assert_eq!(config.bind_address(), "0.0.0.0:8181");
    }

    #[test]
    fn test_parse_serve_command() {
        let cli = Cli::try_parse_from(["receipt-points", "serve", "--port", "3000", "--json-logs"]).unwrap();
        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.port, Some(3000));
                assert!(args.json_logs);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_score_command() {
        let cli = Cli::try_parse_from(["receipt-points", "score", "receipt.json"]).unwrap();
        assert!(matches!(cli.command, Command::Score(ScoreArgs { ref file }) if file == "receipt.json"));
    }
}
