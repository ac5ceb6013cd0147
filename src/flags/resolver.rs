//! Version resolution from a manifest

use tracing::{debug, info};

use crate::config::{SENTINEL_VERSION, TARGET_DEPENDENCY};
use crate::manifest::Manifest;

/// Versions extracted from a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersions {
    /// The manifest's top-level `version`
    pub library_version: String,
    /// Version of the target dependency, or [`SENTINEL_VERSION`]
    pub dependency_version: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The matching dependency record has no `version` key
    #[error("Dependency {name:?} has no version")]
    MissingDependencyVersion { name: String },
}

/// Resolve versions for the `tinywot` dependency.
pub fn resolve(manifest: &Manifest) -> Result<ResolvedVersions, ResolveError> {
    resolve_with(manifest, TARGET_DEPENDENCY)
}

/// Resolve versions for the dependency called `target`.
///
/// Every record is scanned and each match overwrites the previous one, so
/// when `target` is listed more than once the last entry wins. Without a
/// match the dependency version is [`SENTINEL_VERSION`].
pub fn resolve_with(manifest: &Manifest, target: &str) -> Result<ResolvedVersions, ResolveError> {
    let mut matched = None;
    let mut matches = 0usize;

    for dep in &manifest.dependencies {
        if dep.name == target {
            matched = Some(dep);
            matches += 1;
        }
    }

    if matches > 1 {
        info!(
            "Dependency {:?} listed {} times, using the last entry",
            target, matches
        );
    }

    let dependency_version = match matched {
        Some(dep) => dep
            .version
            .clone()
            .ok_or_else(|| ResolveError::MissingDependencyVersion {
                name: dep.name.clone(),
            })?,
        None => {
            debug!(
                "Dependency {:?} not found, falling back to {:?}",
                target, SENTINEL_VERSION
            );
            SENTINEL_VERSION.to_string()
        }
    };

    Ok(ResolvedVersions {
        library_version: manifest.version.clone(),
        dependency_version,
    })
}
