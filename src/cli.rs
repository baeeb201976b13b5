// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "muster")]
#[command(about = "Deployment status for services running across a fleet of clusters")]
#[command(version)]
pub struct Cli {
    /// Print more output regarding the state of the service
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display the deployment status of a service
    Status {
        /// The name of the service to inspect (deduced from the current
        /// directory when omitted)
        #[arg(short, long)]
        service: Option<String>,

        /// Comma separated list of clusters to view. Defaults to all
        /// clusters. Try: --clusters norcal-prod,nova-prod
        #[arg(short, long)]
        clusters: Option<String>,

        /// Root of the service configuration tree
        #[arg(long, default_value = muster::config::DEFAULT_SOA_DIR)]
        soa_dir: PathBuf,

        /// SSH user for status probes (defaults to $USER)
        #[arg(long)]
        ssh_user: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}
