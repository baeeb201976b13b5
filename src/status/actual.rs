// ABOUTME: Reader for the observed deployment record.
// ABOUTME: Filters by service, strips the deploy prefix, derives versions.

use crate::config::DeploymentsFile;
use crate::error::{Error, Result};
use crate::types::{ServiceName, TargetNamespace};
use std::collections::HashMap;

/// Prefix the deployment system prepends to control-group names.
const DEPLOY_PREFIX: &str = "paasta-";

/// The deployments observed for one service: namespace -> version.
///
/// Keys are the record namespaces after stripping the deploy prefix; for a
/// deploy target they match the `cluster.instance` form of the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActualDeployments {
    versions: HashMap<String, String>,
}

impl ActualDeployments {
    /// Build from the raw record, keeping only entries for `service`.
    ///
    /// Record keys are `"<service>:<namespace>"`; any other shape fails
    /// loudly rather than being dropped. An empty record is valid and only
    /// warrants a warning: the service has not been deployed anywhere yet.
    pub fn from_record(record: &DeploymentsFile, service: &ServiceName) -> Result<Self> {
        if record.is_empty() {
            tracing::warn!(
                "it looks like {} has not been deployed anywhere yet",
                service
            );
            return Ok(Self::default());
        }

        let mut versions = HashMap::new();
        for (key, entry) in &record.records {
            if key.matches(':').count() != 1 {
                return Err(Error::MalformedDeploymentKey(key.clone()));
            }
            let (record_service, namespace) = key.split_once(':').expect("count checked above");
            if record_service != service.as_str() {
                continue;
            }
            let namespace = namespace.replacen(DEPLOY_PREFIX, "", 1);
            versions.insert(namespace, version_from_image(&entry.docker_image).to_string());
        }

        Ok(Self { versions })
    }

    pub fn version_for(&self, target: &TargetNamespace) -> Option<&str> {
        self.versions.get(&target.to_string()).map(String::as_str)
    }

    pub fn contains(&self, target: &TargetNamespace) -> bool {
        self.versions.contains_key(&target.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    #[cfg(test)]
    pub(crate) fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            versions: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The version baked into an image reference: everything after the last `-`.
///
/// Image references end in `-<sha>` by convention. A reference with no `-`
/// is degenerate but not an error; the whole string is the version.
fn version_from_image(image: &str) -> &str {
    match image.rfind('-') {
        Some(pos) => &image[pos + 1..],
        None => image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeploymentRecord;
    use std::collections::BTreeMap;

    fn record(entries: &[(&str, &str)]) -> DeploymentsFile {
        let records: BTreeMap<String, DeploymentRecord> = entries
            .iter()
            .map(|(k, image)| {
                (
                    k.to_string(),
                    DeploymentRecord {
                        docker_image: image.to_string(),
                    },
                )
            })
            .collect();
        DeploymentsFile { records }
    }

    fn service(name: &str) -> ServiceName {
        ServiceName::new(name).unwrap()
    }

    #[test]
    fn derives_version_and_strips_prefix() {
        let raw = record(&[("myservice:paasta-main", "services-myservice-a1b2c3d4")]);
        let actual = ActualDeployments::from_record(&raw, &service("myservice")).unwrap();
        assert_eq!(
            actual,
            ActualDeployments::from_entries([("main", "a1b2c3d4")])
        );
    }

    #[test]
    fn drops_entries_for_other_services() {
        let raw = record(&[
            ("myservice:paasta-norcal-prod.main", "services-myservice-aaaa"),
            ("otherservice:paasta-norcal-prod.main", "services-otherservice-bbbb"),
        ]);
        let actual = ActualDeployments::from_record(&raw, &service("myservice")).unwrap();
        assert_eq!(actual.len(), 1);
        let target = TargetNamespace::parse("norcal-prod.main").unwrap();
        assert_eq!(actual.version_for(&target), Some("aaaa"));
    }

    #[test]
    fn image_without_dash_is_whole_version() {
        let raw = record(&[("myservice:paasta-main", "imagename")]);
        let actual = ActualDeployments::from_record(&raw, &service("myservice")).unwrap();
        assert_eq!(
            actual,
            ActualDeployments::from_entries([("main", "imagename")])
        );
    }

    #[test]
    fn strips_prefix_only_once() {
        let raw = record(&[("myservice:paasta-paasta-main", "x-abcd")]);
        let actual = ActualDeployments::from_record(&raw, &service("myservice")).unwrap();
        assert_eq!(
            actual,
            ActualDeployments::from_entries([("paasta-main", "abcd")])
        );
    }

    #[test]
    fn malformed_key_fails() {
        let raw = record(&[("myservice", "image-abcd")]);
        let err = ActualDeployments::from_record(&raw, &service("myservice")).unwrap_err();
        assert!(matches!(err, Error::MalformedDeploymentKey(_)));

        let raw = record(&[("myservice:extra:paasta-main", "image-abcd")]);
        let err = ActualDeployments::from_record(&raw, &service("myservice")).unwrap_err();
        assert!(matches!(err, Error::MalformedDeploymentKey(_)));
    }

    #[test]
    fn empty_record_is_valid_and_empty() {
        let actual =
            ActualDeployments::from_record(&DeploymentsFile::default(), &service("myservice"))
                .unwrap();
        assert!(actual.is_empty());
    }
}
