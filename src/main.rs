//! Secondhand CLI binary entry point.

use clap::Parser;
use secondhand::cli::{AuthCommands, Cli, Commands};
use secondhand::config::ClientConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let result = match cli.command {
        Commands::Auth(auth_args) => match auth_args.command {
            AuthCommands::Login(args) => {
                secondhand::cli::auth::handle_login(&config, &args.email, args.password).await
            }
            AuthCommands::Status => secondhand::cli::auth::handle_status(&config),
            AuthCommands::Logout => secondhand::cli::auth::handle_logout(&config),
        },
        Commands::Start => secondhand::cli::auth::handle_start(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
