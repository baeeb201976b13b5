// ABOUTME: Live status probe seam for deployed instances.
// ABOUTME: The reconciler calls this once per deployed target.

mod ssh;

pub use ssh::SshProbe;

use crate::types::ServiceName;
use async_trait::async_trait;

/// Fetches the live status of one deployed instance.
///
/// Implementations own their transport policy (timeouts, retries); the
/// reconciler only requires that one failed probe never affects another.
#[async_trait]
pub trait StatusProbe: Send + Sync {
    /// Return the multi-line status text for `service`'s `instance` running
    /// in `cluster`.
    async fn status(
        &self,
        cluster: &str,
        service: &ServiceName,
        instance: &str,
        verbose: bool,
    ) -> Result<String, ProbeError>;
}

/// Errors from a status probe.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("could not reach {host}: {reason}")]
    Unreachable { host: String, reason: String },

    #[error("status command failed on {host} (exit {exit_code}): {stderr}")]
    CommandFailed {
        host: String,
        exit_code: u32,
        stderr: String,
    },
}
