// ABOUTME: Dashboard URL construction for deploy pipelines.
// ABOUTME: Pure formatting; no requests are made.

use crate::types::ServiceName;

const PIPELINE_DASHBOARD_BASE: &str = "https://jenkins.yelpcorp.com/view";

/// URL of the CI view that runs a service's deploy pipeline.
pub fn pipeline_url(service: &ServiceName) -> String {
    format!(
        "{}/services-{}",
        PIPELINE_DASHBOARD_BASE,
        urlencoding::encode(service.as_str())
    )
}
