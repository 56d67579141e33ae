use crate::config::toml_config::{AppConfig, LOG_FORMATS};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "timetable-validator")]
#[command(about = "Checks course timetables for instructor double-booking")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP validation server
    Serve(ServeArgs),
    /// Validate a schedule file (.json or .csv)
    Check(CheckArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Override server.port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override logging.format
    #[arg(long, value_parser = LOG_FORMATS)]
    pub log_format: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Schedule file to validate
    pub file: PathBuf,

    /// Validate against a running server instead of in-process
    #[arg(long)]
    pub server: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Loads the file config (or defaults) and applies command-line overrides.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if self.verbose {
            config.logging.level = "debug".to_string();
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CheckArgs {
    fn validate(&self) -> Result<()> {
        if let Some(server) = &self.server {
            crate::utils::validation::validate_url("server", server)?;
        }
        Ok(())
    }
}
