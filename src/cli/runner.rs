//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server::{parse_stage_ids, serve, AppState};
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::output::write_csv_file;
use crate::remote::{BaseHiringClient, CandidatesLink};
use crate::service::HiringService;
use serde_json::Value;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
    config: AppConfig,
}

impl Runner {
    /// Create a new runner over loaded configuration
    pub fn new(cli: Cli, config: AppConfig) -> Self {
        Self { cli, config }
    }

    /// Run the CLI command
    pub async fn run(mut self) -> Result<()> {
        self.apply_overrides();
        self.config.validate()?;

        let service = self.build_service()?;
        let token = self.config.access_token()?.to_string();

        match &self.cli.command {
            Commands::Serve { .. } => {
                let addr = self.config.server.socket_addr()?;
                serve(AppState::new(service, token), addr).await
            }
            Commands::Openings => {
                let table = service.list_active_openings(&token).await?;
                self.output_message(&serde_json::to_value(&table)?);
                Ok(())
            }
            Commands::Stages { opening_id } => {
                let table = service.list_active_stages(opening_id, &token).await?;
                self.output_message(&serde_json::to_value(&table)?);
                Ok(())
            }
            Commands::Candidates {
                opening_id,
                stage_ids,
                url,
                output,
            } => {
                let (opening_id, stage_ids) =
                    candidates_target(opening_id.as_deref(), stage_ids.as_deref(), url.as_deref())?;
                let table = service
                    .get_candidates(&opening_id, &token, Some(stage_ids.as_slice()))
                    .await?;

                match output {
                    Some(path) => {
                        write_csv_file(&table, path)?;
                        info!("Wrote {} candidates to {}", table.len(), path.display());
                    }
                    None => self.output_message(&serde_json::to_value(&table)?),
                }
                Ok(())
            }
            Commands::JobDescription { opening_id } => {
                let text = service.fetch_job_description(opening_id, &token).await?;
                println!("{text}");
                Ok(())
            }
        }
    }

    /// Flags take precedence over file and environment values
    fn apply_overrides(&mut self) {
        if let Some(token) = &self.cli.token {
            self.config.remote.access_token = Some(token.clone());
        }
        if let Commands::Serve { host, port } = &self.cli.command {
            if let Some(host) = host {
                self.config.server.host = host.clone();
            }
            if let Some(port) = port {
                self.config.server.port = *port;
            }
        }
    }

    fn build_service(&self) -> Result<HiringService<BaseHiringClient>> {
        let client = BaseHiringClient::new(&self.config.remote)?;
        Ok(HiringService::new(client, self.config.candidate_link()?))
    }

    /// Print a JSON value in the selected format
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Opening and stage filter from either a board link or explicit flags
fn candidates_target(
    opening_id: Option<&str>,
    stage_ids: Option<&str>,
    url: Option<&str>,
) -> Result<(String, Vec<i64>)> {
    if let Some(url) = url {
        let link = CandidatesLink::parse(url)?;
        return Ok((link.opening_id, vec![link.stage_id]));
    }

    let opening_id = opening_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| Error::missing_param("opening_id"))?;
    let stage_ids = parse_stage_ids(stage_ids.unwrap_or_default())?;
    Ok((opening_id.to_string(), stage_ids))
}
