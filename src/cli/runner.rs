//! CLI runner - executes commands

use crate::api;
use crate::cli::commands::{Cli, Command};
use crate::config::Credentials;
use crate::error::Result;
use crate::http::ApiClient;
use crate::output;
use crate::pagination::Endpoint;
use std::io::{self, Write};

/// CLI runner
pub struct Runner {
    cli: Cli,
    client: ApiClient,
}

impl Runner {
    /// Create a runner talking to the production API
    pub fn new(cli: Cli, credentials: Credentials) -> Self {
        Self {
            cli,
            client: ApiClient::new(credentials),
        }
    }

    /// Create a runner with a preconfigured client
    pub fn with_client(cli: Cli, client: ApiClient) -> Self {
        Self { cli, client }
    }

    /// Run the CLI command.
    ///
    /// Nothing is written to stdout until the full aggregation has
    /// completed; a failed run produces no partial output.
    pub async fn run(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        match self.cli.command {
            Command::Id => {
                let id = api::self_id(&self.client).await?;
                output::write_id(&mut stdout, &id)?;
                stdout.flush()?;
            }
            Command::Me => {
                let body = api::verify_credentials_raw(&self.client).await?;
                writeln!(stdout, "{body}")?;
            }
            Command::Following => {
                let id = api::self_id(&self.client).await?;
                let follows = api::following(&self.client, &id).await?;
                output::write_follows(&mut stdout, &follows)?;
            }
            Command::Followers => self.print_ids(&api::FOLLOWERS, &mut stdout).await?,
            Command::Mutes => self.print_ids(&api::MUTES, &mut stdout).await?,
            Command::Blocks => self.print_ids(&api::BLOCKS, &mut stdout).await?,
        }
        Ok(())
    }

    async fn print_ids<W: Write>(&self, endpoint: &Endpoint, out: &mut W) -> Result<()> {
        let id = api::self_id(&self.client).await?;
        let ids = api::list_ids(&self.client, endpoint, &id).await?;
        output::write_ids(out, ids)?;
        Ok(())
    }
}
