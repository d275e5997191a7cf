//! squadboard - club analytics dashboard service

#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use squadboard::auth::AccessControl;
use squadboard::auth::rbac::Role;
use squadboard::server::HttpServer;
use squadboard::utils::init_tracing;
use squadboard::{Config, Result, VERSION};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "squadboard")]
#[command(about = "Role-gated club analytics dashboard service")]
#[command(version = VERSION)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "SQUADBOARD_CONFIG", default_value = "config/dashboard.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Override the configured host
        #[arg(long)]
        host: Option<String>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate the configuration and print the effective settings
    Check,

    /// Evaluate the route registry for a role and path
    Access {
        /// Role identifier, e.g. `coach` or `performance_director`
        #[arg(long)]
        role: String,

        /// Dashboard path, e.g. `/team-analytics`
        #[arg(long)]
        path: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::from_file(&cli.config).await?;

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    }) {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.dashboard.server.host = host;
            }
            if let Some(port) = port {
                config.dashboard.server.port = port;
            }
            config.validate()?;

            init_tracing(config.logging())?;
            info!("squadboard {} starting", VERSION);

            HttpServer::new(&config).await?.start().await
        }
        Commands::Check => {
            println!("{}", config.to_yaml()?);
            Ok(())
        }
        Commands::Access { role, path } => {
            let access = AccessControl::new(config.access());
            let check = access.check_route(Role::parse_lenient(&role), &path);
            println!("{}", serde_json::to_string_pretty(&check)?);
            Ok(())
        }
    }
}
