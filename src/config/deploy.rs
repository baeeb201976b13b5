// ABOUTME: Deploy pipeline configuration, read from a service's deploy.yaml.
// ABOUTME: An ordered list of pipeline steps, each named by a namespace string.

use crate::error::{Error, Result};
use crate::types::ServiceName;
use serde::Deserialize;
use std::path::Path;

/// One declared step of the deploy pipeline.
///
/// A step is either a deploy target (`cluster.instance`) or a non-deploy
/// stage such as `itest`; the planner decides which.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PipelineStep {
    pub instancename: String,
}

/// Parsed deploy.yaml: the ordered pipeline declared for a service.
#[derive(Debug, Clone, Deserialize)]
pub struct DeployConfig {
    #[serde(default)]
    pub pipeline: Vec<PipelineStep>,
}

impl DeployConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    /// Load `<soa_dir>/<service>/deploy.yaml`.
    ///
    /// A missing file is terminal: without a declared pipeline there is
    /// nothing to report against.
    pub fn load(soa_dir: &Path, service: &ServiceName) -> Result<Self> {
        let path = super::service_dir(soa_dir, service.as_str()).join("deploy.yaml");
        if !path.is_file() {
            return Err(Error::DeployConfigMissing(path));
        }
        let raw = std::fs::read_to_string(&path)?;
        Self::from_yaml(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pipeline_in_declaration_order() {
        let yaml = r#"
pipeline:
  - instancename: itest
  - instancename: norcal-prod.main
  - instancename: nova-prod.main
"#;
        let config = DeployConfig::from_yaml(yaml).unwrap();
        let names: Vec<&str> = config
            .pipeline
            .iter()
            .map(|s| s.instancename.as_str())
            .collect();
        assert_eq!(names, ["itest", "norcal-prod.main", "nova-prod.main"]);
    }

    #[test]
    fn missing_pipeline_key_is_empty() {
        let config = DeployConfig::from_yaml("{}").unwrap();
        assert!(config.pipeline.is_empty());
    }
}
