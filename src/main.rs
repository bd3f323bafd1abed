//! mobile-deploy-marker CLI
//!
//! Usage: mobile-deploy-marker --account-id <ID> --api-key <KEY> [OPTIONS]
//!
//! One run discovers applications and versions, marks new versions and
//! saves the catalogue. Exit code 0 unless a fatal error occurred; failed
//! markers are logged but do not change the exit code.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use mobile_deploy_marker::application::MarkOptions;
use mobile_deploy_marker::config;
use mobile_deploy_marker::logging;
use mobile_deploy_marker::presentation::{create_mark_use_case, render_report, Cli, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let loaded = config::load(cli.config.as_deref(), cli.overrides(), |key| {
        std::env::var(key).ok()
    });
    let (config, warnings) = match loaded {
        Ok(loaded) => loaded,
        Err(err) => {
            logging::init(cli.log_level.unwrap_or_default());
            return Err(err).context("invalid configuration");
        }
    };

    logging::init(config.log_level);
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    tracing::debug!(?config, "configuration loaded");

    let use_case = create_mark_use_case(&config);
    let report = use_case
        .execute(&MarkOptions::from_config(&config))
        .with_context(|| format!("run aborted (state file {})", config.state_file.display()))?;

    if let Some(rendered) = render_report(&report, OutputFormat::from_json_flag(cli.json))
        .context("failed to render report")?
    {
        println!("{}", rendered);
    }

    Ok(())
}
