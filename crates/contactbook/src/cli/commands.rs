//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Serve command arguments.
#[derive(Debug, Default, Args)]
pub struct ServeCommand {
    /// Address to listen on (overrides config)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Contacts JSON file (overrides config)
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Contacts JSON file (overrides config)
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show configuration file path
    Path,

    /// Validate configuration file
    Validate {
        /// Path to configuration file (uses default if not specified)
        file: Option<PathBuf>,
    },
}
