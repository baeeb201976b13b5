// ABOUTME: Deployment status core: reconciles the planned pipeline against
// ABOUTME: observed deployments and builds the per-cluster report.

mod actual;
mod filter;
mod reconcile;
mod report;

pub use actual::ActualDeployments;
pub use filter::bogus_filters;
pub use reconcile::{InstanceState, InstanceStatus, ProbeOutcome, classify, deployed_clusters};
pub use report::{ClusterStatus, StatusReport, report};
