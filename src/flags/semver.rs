use semver::{Version, VersionReq};
use tracing::info;

use crate::config::SENTINEL_VERSION;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCheck {
    /// Parses as a version (partial versions are padded)
    Version(Version),
    /// Parses as a version requirement such as `^0.2.0`
    Requirement(VersionReq),
    /// The sentinel emitted for an unlisted dependency
    Sentinel,
    /// Neither a version nor a requirement
    Unrecognized,
    /// Contains a quote that would break the flags line quoting
    UnsafeQuote,
}

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Classify a resolved version string, logging anything suspicious at info level.
///
/// The result is advisory: the string is emitted verbatim either way.
pub fn check_version(label: &str, version: &str) -> VersionCheck {
    if version.contains(['\'', '"']) {
        info!(
            "{} version {:?} contains a quote character, the flags line will not parse as intended",
            label, version
        );
        return VersionCheck::UnsafeQuote;
    }

    if version == SENTINEL_VERSION {
        return VersionCheck::Sentinel;
    }

    if let Some(parsed) = parse_version(version) {
        return VersionCheck::Version(parsed);
    }

    match VersionReq::parse(version) {
        Ok(req) => VersionCheck::Requirement(req),
        Err(e) => {
            info!(
                "{} version {:?} is not a semantic version: {}",
                label, version, e
            );
            VersionCheck::Unrecognized
        }
    }
}
