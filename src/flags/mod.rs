//! Version flags layer
//!
//! Turns a loaded [`Manifest`](crate::manifest::Manifest) into the single line of
//! preprocessor definitions handed to the compiler by the build system.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Manifest   │────▶│  Resolver   │────▶│   Render    │
//! │ (library.   │     │ (last match │     │ (-D NAME=   │
//! │   json)     │     │    wins)    │     │   '"v"')    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │   Semver    │
//!                     │ (advisory)  │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`resolver`]: Extracts the library and dependency versions
//! - [`render`]: Formats versions as `-D` definitions
//! - [`semver`]: Advisory checks on resolved version strings

pub mod render;
pub mod resolver;
pub mod semver;

pub use render::{Define, FlagsLine};
pub use resolver::{ResolveError, ResolvedVersions, resolve, resolve_with};
pub use self::semver::{VersionCheck, check_version};
