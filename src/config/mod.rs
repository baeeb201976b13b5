// ABOUTME: On-disk configuration sources for muster.
// ABOUTME: Reads the declared deploy pipeline and the observed deployment record.

mod deploy;
mod deployments;

pub use deploy::{DeployConfig, PipelineStep};
pub use deployments::{DeploymentRecord, DeploymentsFile};

use std::path::{Path, PathBuf};

/// Default root of the service configuration tree.
pub const DEFAULT_SOA_DIR: &str = "/nail/etc/services";

/// Directory holding a single service's configuration files.
pub fn service_dir(soa_dir: &Path, service: &str) -> PathBuf {
    soa_dir.join(service)
}
