use std::path::PathBuf;

// =============================================================================
// Manifest-related constants
// =============================================================================

/// Manifest path, relative to the current working directory
pub const DEFAULT_MANIFEST_PATH: &str = "library.json";

/// Name of the dependency whose version is exported
pub const TARGET_DEPENDENCY: &str = "tinywot";

/// Version emitted when the target dependency is not listed
pub const SENTINEL_VERSION: &str = "0";

// =============================================================================
// Macro names
// =============================================================================

/// Macro receiving the library's own version
pub const LIBRARY_VERSION_MACRO: &str = "TINYWOT_HTTP_SIMPLE_VERSION";

/// Macro receiving the target dependency's version
pub const DEPENDENCY_VERSION_MACRO: &str = "TINYWOT_VERSION";

/// Options for a single flags run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagsConfig {
    /// Path of the manifest to read
    pub manifest_path: PathBuf,
    /// Dependency name to look up in the manifest
    pub target_dependency: String,
}

impl Default for FlagsConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            target_dependency: TARGET_DEPENDENCY.to_string(),
        }
    }
}

impl FlagsConfig {
    /// Returns a config reading the given manifest, keeping the default target.
    pub fn with_manifest_path(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            ..Self::default()
        }
    }
}
