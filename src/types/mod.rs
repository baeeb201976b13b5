// ABOUTME: Validated domain types for muster.
// ABOUTME: Service names and cluster.instance target namespaces.

mod namespace;
mod service_name;

pub use namespace::{ParseNamespaceError, TargetNamespace};
pub use service_name::{ServiceName, ServiceNameError};
