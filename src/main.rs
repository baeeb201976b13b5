// ABOUTME: Entry point for the muster CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use muster::config::{DeployConfig, DeploymentsFile};
use muster::error::Result;
use muster::output::Palette;
use muster::pipeline::PlannedPipeline;
use muster::probe::SshProbe;
use muster::status::{self, ActualDeployments};
use muster::types::ServiceName;
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Status {
            service,
            clusters,
            soa_dir,
            ssh_user,
            no_color,
        } => {
            status_command(
                service.as_deref(),
                clusters.as_deref(),
                &soa_dir,
                ssh_user,
                no_color,
                cli.verbose,
            )
            .await
        }
    }
}

async fn status_command(
    service: Option<&str>,
    clusters: Option<&str>,
    soa_dir: &Path,
    ssh_user: Option<String>,
    no_color: bool,
    verbose: bool,
) -> Result<()> {
    let service = resolve_service(service)?;

    let record = DeploymentsFile::load(soa_dir, &service)?;
    let actual = ActualDeployments::from_record(&record, &service)?;

    let deploy_config = DeployConfig::load(soa_dir, &service)?;
    let pipeline = PlannedPipeline::plan_default(&deploy_config.pipeline)?;
    let flat_targets = pipeline.flat_targets();

    let cluster_filter: Option<Vec<String>> =
        clusters.map(|list| list.split(',').map(str::to_string).collect());

    let user = ssh_user
        .or_else(|| env::var("USER").ok())
        .unwrap_or_else(|| "root".to_string());
    let probe = SshProbe::new(user);

    let report = status::report(
        &service,
        &flat_targets,
        &actual,
        cluster_filter.as_deref(),
        verbose,
        &probe,
    )
    .await;

    let palette = if no_color {
        Palette::new(false)
    } else {
        Palette::auto()
    };
    print!("{}", report.render(&palette));

    Ok(())
}

fn resolve_service(arg: Option<&str>) -> Result<ServiceName> {
    match arg {
        Some(name) => Ok(ServiceName::new(name)?),
        None => {
            let cwd = env::current_dir()?;
            Ok(ServiceName::from_dir(&cwd)?)
        }
    }
}
