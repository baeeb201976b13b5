// ABOUTME: Pipeline planner: turns the declared deploy pipeline into an
// ABOUTME: ordered cluster -> instances structure and a flat target sequence.

use crate::config::PipelineStep;
use crate::error::Result;
use crate::types::TargetNamespace;
use std::collections::HashSet;

/// Pipeline stages that never correspond to a deploy target.
pub const NON_DEPLOY_STEPS: &[&str] =
    &["itest", "security-check", "performance-check", "push-to-registry"];

/// The planned pipeline: clusters in order of first appearance, each with
/// its instances in declaration order.
///
/// Stored as an explicit sequence of (cluster, instances) pairs so that
/// ordering never depends on map iteration order. Duplicate instances are
/// preserved as declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannedPipeline {
    clusters: Vec<(String, Vec<String>)>,
}

impl PlannedPipeline {
    /// Build the planned pipeline from raw steps, skipping non-deploy stages.
    ///
    /// Any remaining step must parse as `cluster.instance`; a malformed
    /// namespace fails the whole plan rather than being dropped, since a
    /// silently dropped step would misreport status.
    pub fn plan(steps: &[PipelineStep], non_deploy: &HashSet<&str>) -> Result<Self> {
        let mut pipeline = Self::default();
        for step in steps {
            if non_deploy.contains(step.instancename.as_str()) {
                continue;
            }
            let target = TargetNamespace::parse(&step.instancename)?;
            pipeline.push(&target);
        }
        Ok(pipeline)
    }

    /// Build with the default non-deploy stage set.
    pub fn plan_default(steps: &[PipelineStep]) -> Result<Self> {
        Self::plan(steps, &NON_DEPLOY_STEPS.iter().copied().collect())
    }

    fn push(&mut self, target: &TargetNamespace) {
        match self
            .clusters
            .iter_mut()
            .find(|(cluster, _)| cluster == target.cluster())
        {
            Some((_, instances)) => instances.push(target.instance().to_string()),
            None => self.clusters.push((
                target.cluster().to_string(),
                vec![target.instance().to_string()],
            )),
        }
    }

    /// Clusters in order of first appearance.
    pub fn clusters(&self) -> impl Iterator<Item = &str> {
        self.clusters.iter().map(|(cluster, _)| cluster.as_str())
    }

    /// Instances declared for a cluster, in declaration order.
    pub fn instances(&self, cluster: &str) -> &[String] {
        self.clusters
            .iter()
            .find(|(c, _)| c == cluster)
            .map(|(_, instances)| instances.as_slice())
            .unwrap_or(&[])
    }

    /// The canonical deploy pipeline: every `cluster.instance` target,
    /// grouped by cluster in first-appearance order.
    pub fn flat_targets(&self) -> Vec<TargetNamespace> {
        self.clusters
            .iter()
            .flat_map(|(cluster, instances)| {
                instances.iter().map(move |instance| {
                    TargetNamespace::parse(&format!("{cluster}.{instance}"))
                        .expect("segments validated at plan time")
                })
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}
