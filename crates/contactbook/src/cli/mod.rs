//! Command-line interface for contactbook.
//!
//! This module provides the CLI structure for the `contactbook` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, ListCommand, ServeCommand};

use crate::config::Config;
use crate::logging::Verbosity;

/// contactbook - Keep a small address book in a JSON file
///
/// Serves a web page for listing, adding, editing, and deleting contacts.
#[derive(Debug, Parser)]
#[command(name = "contactbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the web server
    Serve(ServeCommand),

    /// Print all contacts
    List(ListCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}

impl ServeCommand {
    /// Apply the command-line overrides on top of the loaded configuration.
    #[must_use]
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(bind) = &self.bind {
            config.server.bind_address.clone_from(bind);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(data) = &self.data {
            config.storage.data_path = Some(data.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "contactbook");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        let cli = Cli::try_parse_from(["contactbook", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Trace);

        let cli = Cli::try_parse_from(["contactbook", "-q", "list"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "contactbook",
            "serve",
            "--bind",
            "0.0.0.0",
            "--port",
            "8080",
            "--data",
            "/tmp/contacts.json",
        ])
        .unwrap();

        let Command::Serve(serve) = cli.command else {
            panic!("expected serve command");
        };
        let config = serve.apply(Config::default());
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.data_path(), PathBuf::from("/tmp/contacts.json"));
    }

    #[test]
    fn test_serve_without_overrides_keeps_config() {
        let config = ServeCommand::default().apply(Config::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_list_json() {
        let cli = Cli::try_parse_from(["contactbook", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::List(ListCommand { json: true, .. })));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = Cli::try_parse_from(["contactbook", "config", "validate", "/etc/cb.toml"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: Some(_) })
        ));
    }

    #[test]
    fn test_parse_with_config() {
        let cli =
            Cli::try_parse_from(["contactbook", "-c", "/custom/config.toml", "list"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
