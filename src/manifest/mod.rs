//! Manifest layer
//! - types.rs: Manifest data model (Manifest, DependencyRecord)
//! - loader.rs: Reading and parsing library.json
//! - error.rs: Error taxonomy for loading

pub mod error;
pub mod loader;
pub mod types;

pub use error::ManifestError;
pub use loader::{load, load_default, parse};
pub use types::{DependencyRecord, Manifest};
