// src/cli.rs
use crate::core::{ConfigManager, ServiceClient};
use crate::jobs::{resolve_city, JobAggregator};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "asha-api")]
#[command(about = "Jobs, events and chat API for the Asha site")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default)
    Serve {
        /// Override ROCKET_PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run the jobs pipeline once and print the JSON response
    Jobs {
        #[arg(long, default_value = "All Cities")]
        city: String,
    },
}

pub async fn handle_command(cli: Cli, mut config: ConfigManager) -> Result<()> {
    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            crate::start_web_server(config).await
        }
        Command::Jobs { city } => {
            let client = ServiceClient::new(config.http.timeout_seconds)?;
            let aggregator = JobAggregator::new(&config.jobs, client);
            let response = aggregator.search(&resolve_city(Some(&city))).await;

            let json = serde_json::to_string_pretty(&response)
                .context("Failed to serialize jobs response")?;
            println!("{}", json);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::try_parse_from(["asha-api"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_jobs_command() {
        let cli = Cli::try_parse_from(["asha-api", "jobs", "--city", "New Delhi"]).unwrap();
        match cli.command {
            Some(Command::Jobs { city }) => assert_eq!(city, "New Delhi"),
            _ => panic!("expected jobs command"),
        }
    }

    #[test]
    fn test_parse_serve_port() {
        let cli = Cli::try_parse_from(["asha-api", "serve", "--port", "9001"]).unwrap();
        match cli.command {
            Some(Command::Serve { port }) => assert_eq!(port, Some(9001)),
            _ => panic!("expected serve command"),
        }
    }
}
