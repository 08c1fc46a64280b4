pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fetchers;
pub mod http;
pub mod ranking;
pub mod services;
pub mod timing;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use log::info;
use std::path::Path;

use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::RawSplitRecord;
use crate::fetchers::{FileSource, RecordSource, ResultsPageScraper};
use crate::services::printer::render_leaderboard;
use crate::services::server::ServerService;
use crate::services::transformer::ResultTransformer;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_transform(input: &Path, output: Option<&Path>) -> Result<()> {
    let config = AppConfig::new();
    let records = fetch_records(&FileSource::new(input))?;

    let transformer = ResultTransformer::new(config.race);
    let views = transformer.transform(&records);
    let json = serde_json::to_string_pretty(&views).context("Failed to serialize results")?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote results to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn handle_show(input: Option<&Path>) -> Result<()> {
    let config = AppConfig::new();
    let records = match input {
        Some(path) => fetch_records(&FileSource::new(path))?,
        None => fetch_records(&ResultsPageScraper::new(&config.scraper)?)?,
    };

    let transformer = ResultTransformer::new(config.race);
    print!("{}", render_leaderboard(&transformer.leaderboard(&records)));
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

/// Drive a record source to completion on a fresh runtime.
fn fetch_records(source: &dyn RecordSource) -> Result<Vec<RawSplitRecord>> {
    let runtime = tokio::runtime::Runtime::new()?;
    let records = runtime.block_on(source.fetch_raw_records())?;
    Ok(records)
}
