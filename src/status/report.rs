// ABOUTME: Status reporter: orchestrates planner, reader, reconciler, filter
// ABOUTME: validator and probe into one report, plus its pure rendering.

use super::{ActualDeployments, InstanceState, InstanceStatus, ProbeOutcome};
use crate::output::Palette;
use crate::probe::StatusProbe;
use crate::types::{ServiceName, TargetNamespace};
use crate::urls::pipeline_url;
use std::fmt::Write;

/// Versions are git shas; eight characters is enough to identify one.
const VERSION_DISPLAY_LEN: usize = 8;

/// All instance statuses for one reported cluster, in pipeline order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterStatus {
    pub cluster: String,
    pub instances: Vec<InstanceStatus>,
}

/// The outcome of one status report invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusReport {
    /// The service has no observed deployments at all. Distinct from a
    /// cluster-level absence; nothing else is reported.
    NoDeployments {
        service: ServiceName,
        pipeline_url: String,
    },

    /// Per-cluster status for every deployed cluster retained by the filter.
    Clusters {
        pipeline_url: String,
        clusters: Vec<ClusterStatus>,
        bogus_filters: Vec<String>,
    },
}

/// Build the status report for a service.
///
/// Clusters appear in pipeline order; a cluster filter drops clusters from
/// the output but never reorders it. Only targets in retained clusters are
/// probed.
pub async fn report(
    service: &ServiceName,
    flat_targets: &[TargetNamespace],
    actual: &ActualDeployments,
    filter: Option<&[String]>,
    verbose: bool,
    probe: &dyn StatusProbe,
) -> StatusReport {
    let url = pipeline_url(service);

    if actual.is_empty() {
        return StatusReport::NoDeployments {
            service: service.clone(),
            pipeline_url: url,
        };
    }

    let deployed = super::deployed_clusters(flat_targets, actual);
    let retained: Vec<&String> = deployed
        .iter()
        .filter(|cluster| filter.is_none_or(|f| f.contains(cluster)))
        .collect();

    let mut clusters = Vec::with_capacity(retained.len());
    for cluster in retained {
        let targets: Vec<TargetNamespace> = flat_targets
            .iter()
            .filter(|t| t.cluster() == cluster)
            .cloned()
            .collect();
        let instances = super::classify(&targets, actual, probe, service, verbose).await;
        clusters.push(ClusterStatus {
            cluster: cluster.clone(),
            instances,
        });
    }

    StatusReport::Clusters {
        pipeline_url: url,
        clusters,
        bogus_filters: super::bogus_filters(filter, &deployed),
    }
}

impl StatusReport {
    /// Render the report for the terminal. Pure formatting over the palette.
    pub fn render(&self, palette: &Palette) -> String {
        let mut out = String::new();
        match self {
            StatusReport::NoDeployments { pipeline_url, .. } => {
                writeln!(
                    out,
                    "{} No deployments in deployments.json yet.",
                    palette.x_mark()
                )
                .expect("writing to String");
                writeln!(out, "  Has Jenkins run?").expect("writing to String");
                writeln!(out, "  Check: {}", palette.cyan(pipeline_url))
                    .expect("writing to String");
            }
            StatusReport::Clusters {
                pipeline_url,
                clusters,
                bogus_filters,
            } => {
                writeln!(out, "Pipeline: {}", palette.cyan(pipeline_url))
                    .expect("writing to String");
                for cluster in clusters {
                    render_cluster(&mut out, cluster, palette);
                }
                if !bogus_filters.is_empty() {
                    writeln!(out).expect("writing to String");
                    writeln!(
                        out,
                        "Warning: The following clusters in the filter look bogus, this service"
                    )
                    .expect("writing to String");
                    writeln!(out, "is not deployed to the following cluster(s):")
                        .expect("writing to String");
                    writeln!(out, "{}", bogus_filters.join(",")).expect("writing to String");
                }
            }
        }
        out
    }
}

fn render_cluster(out: &mut String, cluster: &ClusterStatus, palette: &Palette) {
    writeln!(out).expect("writing to String");
    writeln!(out, "cluster: {}", cluster.cluster).expect("writing to String");
    for line in &cluster.instances {
        match &line.state {
            InstanceState::Deployed { version, probe } => {
                writeln!(out, "  instance: {}", palette.blue(line.target.instance()))
                    .expect("writing to String");
                // Truncate on character boundaries: the version is whatever
                // follows the image's last '-', which need not be ASCII.
                let short: String = version.chars().take(VERSION_DISPLAY_LEN).collect();
                writeln!(out, "    Git sha:    {short}").expect("writing to String");
                match probe {
                    ProbeOutcome::Status(text) => {
                        for status_line in text.trim_end().lines() {
                            writeln!(out, "    {status_line}").expect("writing to String");
                        }
                    }
                    ProbeOutcome::Failed(reason) => {
                        writeln!(
                            out,
                            "    {}",
                            palette.red(&format!("Status probe failed: {reason}"))
                        )
                        .expect("writing to String");
                    }
                }
            }
            InstanceState::NotDeployed => {
                writeln!(out, "  instance: {}", palette.red(line.target.instance()))
                    .expect("writing to String");
                writeln!(out, "    Git sha:    None").expect("writing to String");
            }
        }
    }
}
