//! flock CLI
//!
//! Command-line entry point: parse arguments, load credentials, run.

use clap::Parser;
use flock::cli::{Cli, Runner};
use flock::config::Credentials;

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout is the data channel.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Credentials are loaded before any network activity.
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let runner = Runner::new(cli, credentials);
    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
