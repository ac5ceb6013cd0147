//! Preprocessor version flags for TinyWoT HTTP Simple
//!
//! Reads the PlatformIO manifest (`library.json`) and produces the line of
//! `-D` definitions that bakes the library version and the `tinywot`
//! dependency version into the firmware as string constants.
//!
//! # Modules
//!
//! - [`config`]: Constants and run options
//! - [`manifest`]: Manifest types and loading
//! - [`flags`]: Version resolution and rendering
//! - [`logging`]: stderr tracing subscriber

use anyhow::Context;
use tracing::info;

pub mod config;
pub mod flags;
pub mod logging;
pub mod manifest;

use config::{DEPENDENCY_VERSION_MACRO, FlagsConfig, LIBRARY_VERSION_MACRO};
use flags::FlagsLine;

/// Build the flags line described by `config`.
///
/// Nothing is written here; the caller prints the returned line, so a failed
/// run never leaves a partial line on standard output.
pub fn run(config: &FlagsConfig) -> anyhow::Result<FlagsLine> {
    let manifest = manifest::load(&config.manifest_path)?;

    let versions = flags::resolve_with(&manifest, &config.target_dependency).with_context(|| {
        format!(
            "Failed to resolve versions from {}",
            config.manifest_path.display()
        )
    })?;

    flags::check_version(LIBRARY_VERSION_MACRO, &versions.library_version);
    flags::check_version(DEPENDENCY_VERSION_MACRO, &versions.dependency_version);

    info!(
        "library version {:?}, {} version {:?}",
        versions.library_version, config.target_dependency, versions.dependency_version
    );

    Ok(FlagsLine::from(&versions))
}
