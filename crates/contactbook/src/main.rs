//! `contactbook` - CLI for the contact book
//!
//! Runs the web server and offers a few maintenance commands for the
//! contacts file and configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;

use contactbook::cli::{Cli, Command, ConfigCommand, ListCommand};
use contactbook::{init_logging, web, Config, ContactRepository, ContactStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        Command::Serve(serve_cmd) => {
            let config = serve_cmd.apply(config);
            config.validate()?;
            web::serve(&config).await?;
        }
        Command::List(list_cmd) => handle_list(&config, &list_cmd)?,
        Command::Config(config_cmd) => handle_config(&config, config_cmd)?,
    }
    Ok(())
}

fn handle_list(config: &Config, cmd: &ListCommand) -> Result<(), Box<dyn std::error::Error>> {
    let path = cmd.data.clone().unwrap_or_else(|| config.data_path());
    let contacts = ContactRepository::new(ContactStore::new(path)).list_all()?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&contacts)?);
        return Ok(());
    }

    if contacts.is_empty() {
        println!("No contacts.");
        return Ok(());
    }
    for contact in &contacts {
        if contact.email.is_empty() {
            println!("{}  {}", contact.id, contact.full_name());
        } else {
            println!("{}  {} <{}>", contact.id, contact.full_name(), contact.email);
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Server]");
                println!("  Bind address:  {}", config.server.bind_address);
                println!("  Port:          {}", config.server.port);
                println!();
                println!("[Storage]");
                println!("  Data path:     {}", config.data_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
