//! Types for the PlatformIO library manifest (`library.json`)

use serde::Deserialize;

/// The subset of `library.json` consumed when building version flags.
///
/// Unknown keys (`name`, `keywords`, `frameworks`, ...) are ignored.
///
/// # Example
///
/// ```json
/// {
///   "version": "0.1.0",
///   "dependencies": [
///     { "name": "tinywot", "version": "0.2.0" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// The library's own version
    pub version: String,
    /// Declared dependencies, in file order
    pub dependencies: Vec<DependencyRecord>,
}

/// A single entry of the `dependencies` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DependencyRecord {
    pub name: String,
    /// PlatformIO allows omitting the version requirement
    #[serde(default)]
    pub version: Option<String>,
}
