// ABOUTME: Reconciler: matches planned targets against observed deployments.
// ABOUTME: Derives the deployed-cluster list and per-target status lines.

use super::ActualDeployments;
use crate::probe::StatusProbe;
use crate::types::{ServiceName, TargetNamespace};

/// Outcome of the live status probe for one deployed target.
///
/// A probe failure is captured here instead of propagating: one unreachable
/// master must not abort the rest of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Status(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceState {
    Deployed {
        version: String,
        probe: ProbeOutcome,
    },
    NotDeployed,
}

/// Status of one planned target, in pipeline order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceStatus {
    pub target: TargetNamespace,
    pub state: InstanceState,
}

/// Clusters with at least one observed deployment, in pipeline order.
///
/// An order-preserving, de-duplicated projection of `flat_targets`.
pub fn deployed_clusters(
    flat_targets: &[TargetNamespace],
    actual: &ActualDeployments,
) -> Vec<String> {
    let mut clusters: Vec<String> = Vec::new();
    for target in flat_targets {
        if actual.contains(target) && !clusters.iter().any(|c| c == target.cluster()) {
            clusters.push(target.cluster().to_string());
        }
    }
    clusters
}

/// Classify every planned target as deployed or not, probing live status for
/// the deployed ones.
///
/// Probes run sequentially in pipeline order; output order always matches
/// input order.
pub async fn classify(
    flat_targets: &[TargetNamespace],
    actual: &ActualDeployments,
    probe: &dyn StatusProbe,
    service: &ServiceName,
    verbose: bool,
) -> Vec<InstanceStatus> {
    let mut lines = Vec::with_capacity(flat_targets.len());
    for target in flat_targets {
        let state = match actual.version_for(target) {
            Some(version) => {
                let outcome = match probe
                    .status(target.cluster(), service, target.instance(), verbose)
                    .await
                {
                    Ok(text) => ProbeOutcome::Status(text),
                    Err(e) => {
                        tracing::warn!("status probe for {} failed: {}", target, e);
                        ProbeOutcome::Failed(e.to_string())
                    }
                };
                InstanceState::Deployed {
                    version: version.to_string(),
                    probe: outcome,
                }
            }
            None => InstanceState::NotDeployed,
        };
        lines.push(InstanceStatus {
            target: target.clone(),
            state,
        });
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeError;
    use async_trait::async_trait;

    struct FixedProbe;

    #[async_trait]
    impl StatusProbe for FixedProbe {
        async fn status(
            &self,
            _cluster: &str,
            _service: &ServiceName,
            _instance: &str,
            _verbose: bool,
        ) -> Result<String, ProbeError> {
            Ok("Healthy\n".to_string())
        }
    }

    struct FailingProbe;

    #[async_trait]
    impl StatusProbe for FailingProbe {
        async fn status(
            &self,
            cluster: &str,
            _service: &ServiceName,
            _instance: &str,
            _verbose: bool,
        ) -> Result<String, ProbeError> {
            Err(ProbeError::Unreachable {
                host: format!("paasta-{cluster}"),
                reason: "connection refused".to_string(),
            })
        }
    }

    fn targets(names: &[&str]) -> Vec<TargetNamespace> {
        names
            .iter()
            .map(|n| TargetNamespace::parse(n).unwrap())
            .collect()
    }

    #[test]
    fn deployed_clusters_preserve_pipeline_order() {
        let flat = targets(&["norcal-prod.main", "nova-prod.main", "norcal-prod.canary"]);
        let actual = ActualDeployments::from_entries([
            ("nova-prod.main", "bbbb"),
            ("norcal-prod.canary", "aaaa"),
        ]);
        assert_eq!(
            deployed_clusters(&flat, &actual),
            ["nova-prod", "norcal-prod"]
        );
    }

    #[test]
    fn deployed_clusters_deduplicate() {
        let flat = targets(&["norcal-prod.main", "norcal-prod.canary"]);
        let actual = ActualDeployments::from_entries([
            ("norcal-prod.main", "aaaa"),
            ("norcal-prod.canary", "aaaa"),
        ]);
        assert_eq!(deployed_clusters(&flat, &actual), ["norcal-prod"]);
    }

    #[test]
    fn deployed_clusters_empty_when_nothing_matches() {
        let flat = targets(&["norcal-prod.main"]);
        let actual = ActualDeployments::from_entries([("nova-prod.main", "aaaa")]);
        assert!(deployed_clusters(&flat, &actual).is_empty());
    }

    #[tokio::test]
    async fn classify_splits_deployed_and_missing() {
        let flat = targets(&["norcal-prod.main", "nova-prod.main"]);
        let actual = ActualDeployments::from_entries([("norcal-prod.main", "a1b2c3d4")]);
        let service = ServiceName::new("myservice").unwrap();

        let lines = classify(&flat, &actual, &FixedProbe, &service, false).await;
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0].state,
            InstanceState::Deployed {
                version: "a1b2c3d4".to_string(),
                probe: ProbeOutcome::Status("Healthy\n".to_string()),
            }
        );
        assert_eq!(lines[1].state, InstanceState::NotDeployed);
    }

    #[tokio::test]
    async fn probe_failure_is_isolated_per_instance() {
        let flat = targets(&["norcal-prod.main", "nova-prod.main"]);
        let actual = ActualDeployments::from_entries([
            ("norcal-prod.main", "aaaa"),
            ("nova-prod.main", "bbbb"),
        ]);
        let service = ServiceName::new("myservice").unwrap();

        let lines = classify(&flat, &actual, &FailingProbe, &service, false).await;
        for line in &lines {
            match &line.state {
                InstanceState::Deployed { probe, .. } => {
                    assert!(matches!(probe, ProbeOutcome::Failed(_)));
                }
                InstanceState::NotDeployed => panic!("both targets are deployed"),
            }
        }
    }

    #[tokio::test]
    async fn classify_is_idempotent_with_a_fixed_probe() {
        let flat = targets(&["norcal-prod.main", "nova-prod.main"]);
        let actual = ActualDeployments::from_entries([("norcal-prod.main", "aaaa")]);
        let service = ServiceName::new("myservice").unwrap();

        let first = classify(&flat, &actual, &FixedProbe, &service, false).await;
        let second = classify(&flat, &actual, &FixedProbe, &service, false).await;
        assert_eq!(first, second);
    }
}
