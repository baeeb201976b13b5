// ABOUTME: The observed deployment record, read from deployments.json.
// ABOUTME: Maps "service:namespace" keys to the image each target runs.

use crate::error::{Error, Result};
use crate::types::ServiceName;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// One entry of the deployment record: the image a target was deployed with.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DeploymentRecord {
    pub docker_image: String,
}

/// Parsed deployments.json, keyed by `"<service>:<namespace>"`.
///
/// A BTreeMap keeps iteration deterministic; the reader downstream does not
/// depend on record order, but stable output makes failures reproducible.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct DeploymentsFile {
    pub records: BTreeMap<String, DeploymentRecord>,
}

impl DeploymentsFile {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::from)
    }

    /// Load `<soa_dir>/<service>/deployments.json`.
    ///
    /// A missing file is not an error: it means nothing has been deployed
    /// yet, which the reporter surfaces as its own outcome.
    pub fn load(soa_dir: &Path, service: &ServiceName) -> Result<Self> {
        let path = super::service_dir(soa_dir, service.as_str()).join("deployments.json");
        if !path.is_file() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        Self::from_json(&raw)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
