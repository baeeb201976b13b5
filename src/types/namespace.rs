// ABOUTME: The cluster.instance identifier for a single deployment target.
// ABOUTME: Parsing enforces exactly one dot with non-empty sides.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseNamespaceError {
    #[error("namespace cannot be empty")]
    Empty,

    #[error("namespace '{0}' has no '.' separator (expected cluster.instance)")]
    MissingSeparator(String),

    #[error("namespace '{0}' has more than one '.' separator")]
    AmbiguousSeparator(String),

    #[error("namespace '{0}' has an empty cluster segment")]
    EmptyCluster(String),

    #[error("namespace '{0}' has an empty instance segment")]
    EmptyInstance(String),
}

/// A single deployment target, `cluster.instance`.
///
/// Namespaces with zero or multiple dots are rejected rather than split at
/// the first occurrence: a silent split would assign the instance to a
/// truncated cluster name and misreport status.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetNamespace {
    cluster: String,
    instance: String,
}

impl TargetNamespace {
    pub fn parse(input: &str) -> Result<Self, ParseNamespaceError> {
        if input.is_empty() {
            return Err(ParseNamespaceError::Empty);
        }

        let dots = input.matches('.').count();
        if dots == 0 {
            return Err(ParseNamespaceError::MissingSeparator(input.to_string()));
        }
        if dots > 1 {
            return Err(ParseNamespaceError::AmbiguousSeparator(input.to_string()));
        }

        let (cluster, instance) = input.split_once('.').expect("dot count checked above");

        if cluster.is_empty() {
            return Err(ParseNamespaceError::EmptyCluster(input.to_string()));
        }
        if instance.is_empty() {
            return Err(ParseNamespaceError::EmptyInstance(input.to_string()));
        }

        Ok(Self {
            cluster: cluster.to_string(),
            instance: instance.to_string(),
        })
    }

    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }
}

impl fmt::Display for TargetNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.cluster, self.instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cluster_and_instance() {
        let ns = TargetNamespace::parse("norcal-prod.main").unwrap();
        assert_eq!(ns.cluster(), "norcal-prod");
        assert_eq!(ns.instance(), "main");
        assert_eq!(ns.to_string(), "norcal-prod.main");
    }

    #[test]
    fn rejects_missing_separator() {
        let err = TargetNamespace::parse("itest").unwrap_err();
        assert_eq!(
            err,
            ParseNamespaceError::MissingSeparator("itest".to_string())
        );
    }

    #[test]
    fn rejects_multiple_separators() {
        let err = TargetNamespace::parse("norcal.prod.main").unwrap_err();
        assert_eq!(
            err,
            ParseNamespaceError::AmbiguousSeparator("norcal.prod.main".to_string())
        );
    }

    #[test]
    fn rejects_empty_segments() {
        assert_eq!(
            TargetNamespace::parse(".main").unwrap_err(),
            ParseNamespaceError::EmptyCluster(".main".to_string())
        );
        assert_eq!(
            TargetNamespace::parse("norcal-prod.").unwrap_err(),
            ParseNamespaceError::EmptyInstance("norcal-prod.".to_string())
        );
        assert_eq!(
            TargetNamespace::parse("").unwrap_err(),
            ParseNamespaceError::Empty
        );
    }
}
