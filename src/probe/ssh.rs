// ABOUTME: SSH-backed status probe: runs the serviceinit status command on
// ABOUTME: the master host of the target's cluster.

use super::{ProbeError, StatusProbe};
use crate::ssh::{Session, SessionConfig};
use crate::types::ServiceName;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

/// Default DNS suffix appended to `paasta-<cluster>` to reach a master.
pub const DEFAULT_MASTER_SUFFIX: &str = ".yelpcorp.com";

/// Probes instance status by running `paasta_serviceinit` over SSH on the
/// cluster's master host.
///
/// Each probe opens its own session; masters are different hosts per cluster
/// and a report touches each instance once.
#[derive(Debug, Clone)]
pub struct SshProbe {
    user: String,
    master_suffix: String,
    key_path: Option<PathBuf>,
    command_timeout: Duration,
}

impl SshProbe {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            master_suffix: DEFAULT_MASTER_SUFFIX.to_string(),
            key_path: None,
            command_timeout: Duration::from_secs(60),
        }
    }

    pub fn master_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.master_suffix = suffix.into();
        self
    }

    pub fn key_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.key_path = Some(path.into());
        self
    }

    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    fn master_host(&self, cluster: &str) -> String {
        format!("paasta-{}{}", cluster, self.master_suffix)
    }
}

#[async_trait]
impl StatusProbe for SshProbe {
    async fn status(
        &self,
        cluster: &str,
        service: &ServiceName,
        instance: &str,
        verbose: bool,
    ) -> Result<String, ProbeError> {
        let host = self.master_host(cluster);

        let mut config =
            SessionConfig::new(&host, &self.user).command_timeout(self.command_timeout);
        if let Some(path) = &self.key_path {
            config = config.key_path(path);
        }

        tracing::debug!("probing {}.{} via {}", cluster, instance, host);

        let session = Session::connect(config)
            .await
            .map_err(|e| ProbeError::Unreachable {
                host: host.clone(),
                reason: e.to_string(),
            })?;

        let mut command = format!("paasta_serviceinit {}.{} status", service, instance);
        if verbose {
            command.push_str(" -v");
        }

        let result = session.exec(&command).await;

        // Best-effort disconnect; the probe result already stands.
        if let Ok(ref output) = result {
            tracing::debug!("probe on {} exited {}", host, output.exit_code);
        }
        let _ = session.disconnect().await;

        let output = result.map_err(|e| ProbeError::Unreachable {
            host: host.clone(),
            reason: e.to_string(),
        })?;

        if !output.success() {
            return Err(ProbeError::CommandFailed {
                host,
                exit_code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}
