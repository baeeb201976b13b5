// ABOUTME: Validated service name as it appears in soa-configs directories.
// ABOUTME: Lowercase alphanumerics plus hyphen and underscore.

use std::fmt;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceNameError {
    #[error("service name cannot be empty")]
    Empty,

    #[error("service name cannot start with '{0}'")]
    BadLeadingChar(char),

    #[error("service name must be lowercase")]
    NotLowercase,

    #[error("invalid character in service name: '{0}'")]
    InvalidChar(char),

    #[error("could not deduce a service name from the current directory")]
    NotDeducible,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceName(String);

impl ServiceName {
    pub fn new(value: &str) -> Result<Self, ServiceNameError> {
        let first = value.chars().next().ok_or(ServiceNameError::Empty)?;
        if first == '-' || first == '_' {
            return Err(ServiceNameError::BadLeadingChar(first));
        }

        for c in value.chars() {
            if c.is_ascii_uppercase() {
                return Err(ServiceNameError::NotLowercase);
            }
            if !c.is_ascii_lowercase() && !c.is_ascii_digit() && c != '-' && c != '_' {
                return Err(ServiceNameError::InvalidChar(c));
            }
        }

        Ok(Self(value.to_string()))
    }

    /// Deduce the service name from a working directory, the convention being
    /// that a service is worked on from a checkout named after it.
    pub fn from_dir(dir: &Path) -> Result<Self, ServiceNameError> {
        let name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or(ServiceNameError::NotDeducible)?;
        Self::new(name).map_err(|_| ServiceNameError::NotDeducible)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn accepts_typical_names() {
        for name in ["myservice", "my-service", "my_service2"] {
            assert!(ServiceName::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_bad_names() {
        assert_eq!(ServiceName::new("").unwrap_err(), ServiceNameError::Empty);
        assert_eq!(
            ServiceName::new("-svc").unwrap_err(),
            ServiceNameError::BadLeadingChar('-')
        );
        assert_eq!(
            ServiceName::new("MyService").unwrap_err(),
            ServiceNameError::NotLowercase
        );
        assert_eq!(
            ServiceName::new("my service").unwrap_err(),
            ServiceNameError::InvalidChar(' ')
        );
    }

    #[test]
    fn deduces_from_directory_name() {
        let dir = PathBuf::from("/home/user/pb/myservice");
        assert_eq!(ServiceName::from_dir(&dir).unwrap().as_str(), "myservice");
    }
}
