pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod mail;
pub mod reporting;
pub mod retry;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::{Command, ReportArgs};
use crate::config::{AppConfig, MailCredentials};
use crate::services::ReportService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_send(args: &ReportArgs) -> Result<()> {
    let config = load_config(args)?;
    let credentials = MailCredentials::from_env()?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ReportService::new(config)?;
        service.send(credentials).await
    })
}

pub fn handle_preview(args: &ReportArgs) -> Result<()> {
    let config = load_config(args)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ReportService::new(config)?;
        service.preview().await
    })
}

fn load_config(args: &ReportArgs) -> Result<AppConfig> {
    let mut config = AppConfig::from_env()?;
    apply_overrides(&mut config, args);
    Ok(config)
}

fn apply_overrides(config: &mut AppConfig, args: &ReportArgs) {
    if let Some(min_played) = args.min_played {
        config.report.min_played = min_played;
    }
    if let Some(speed) = &args.speed {
        config.report.speed = speed.clone();
    }
}
