//! Server version parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;

/// Major/minor pair of the target Fess server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ServerVersion {
    pub major: u32,
    pub minor: u32,
}

impl ServerVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Servers before 15.0 create with PUT and edit/start/stop with POST.
    pub fn is_legacy(&self) -> bool {
        self.major <= 14
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for ServerVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

/// Parse `major.minor[.patch[-suffix]]` into its first two components.
///
/// Only the third segment may carry a suffix; `15.4a.0` is rejected.
pub fn parse_version(input: &str) -> Result<ServerVersion, VersionError> {
    let invalid = || VersionError::InvalidFormat(input.to_string());

    let mut segments = input.split('.');
    let major = segments
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(invalid)?;
    let minor = segments
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(invalid)?;

    Ok(ServerVersion::new(major, minor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_version() {
        assert_eq!(parse_version("15.4.0").unwrap(), ServerVersion::new(15, 4));
        assert_eq!(parse_version("14.19.2").unwrap(), ServerVersion::new(14, 19));
    }

    #[test]
    fn test_parse_version_with_snapshot_suffix() {
        assert_eq!(
            parse_version("15.4.0-SNAPSHOT").unwrap(),
            ServerVersion::new(15, 4)
        );
        assert_eq!(
            parse_version("16.0.0-SNAPSHOT").unwrap(),
            ServerVersion::new(16, 0)
        );
    }

    #[test]
    fn test_legacy_boundary() {
        assert!(ServerVersion::new(14, 19).is_legacy());
        assert!(!ServerVersion::new(15, 0).is_legacy());
    }

    #[test]
    fn test_parse_two_segment_version() {
        assert_eq!(parse_version("14.0").unwrap(), ServerVersion::new(14, 0));
    }

    #[test]
    fn test_parse_version_rejects_malformed_input() {
        for input in ["", "abc", "15", "abc.def.ghi", "15.x.0", "15.4a.0", ".4.0"] {
            let err = parse_version(input).unwrap_err();
            assert_eq!(err, VersionError::InvalidFormat(input.to_string()));
        }
    }

    #[test]
    fn test_error_names_input() {
        let err = parse_version("invalid").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Invalid version format"));
        assert!(message.contains("invalid"));
    }

    #[test]
    fn test_every_numeric_triple_yields_major_minor() {
        for major in [0u32, 1, 14, 15, 99] {
            for minor in [0u32, 3, 19, 250] {
                for patch in [0u32, 2, 10] {
                    let version: ServerVersion =
                        format!("{major}.{minor}.{patch}").parse().unwrap();
                    assert_eq!(version, ServerVersion::new(major, minor));
                }
            }
        }
    }
}
