// ABOUTME: Application-wide error types for muster.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::types::{ParseNamespaceError, ServiceNameError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no deploy configuration found at {0} (is this service set up in soa-configs?)")]
    DeployConfigMissing(PathBuf),

    #[error("malformed pipeline namespace: {0}")]
    MalformedNamespace(#[from] ParseNamespaceError),

    #[error("malformed deployment key '{0}': expected exactly one ':' separator")]
    MalformedDeploymentKey(String),

    #[error("invalid service name: {0}")]
    ServiceName(#[from] ServiceNameError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
