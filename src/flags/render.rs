//! Formatting of preprocessor definitions

use std::fmt;

use crate::config::{DEPENDENCY_VERSION_MACRO, LIBRARY_VERSION_MACRO};
use crate::flags::resolver::ResolvedVersions;

/// A single `-D NAME='"value"'` definition.
///
/// The value is wrapped in double quotes so the macro expands to a C string
/// literal, and in single quotes so the shell running the compiler keeps the
/// double quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define {
    pub name: &'static str,
    pub value: String,
}

impl fmt::Display for Define {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-D {}='\"{}\"'", self.name, self.value)
    }
}

/// The full flags line, without a trailing newline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagsLine {
    pub defines: Vec<Define>,
}

impl From<&ResolvedVersions> for FlagsLine {
    fn from(versions: &ResolvedVersions) -> Self {
        Self {
            defines: vec![
                Define {
                    name: LIBRARY_VERSION_MACRO,
                    value: versions.library_version.clone(),
                },
                Define {
                    name: DEPENDENCY_VERSION_MACRO,
                    value: versions.dependency_version.clone(),
                },
            ],
        }
    }
}

impl fmt::Display for FlagsLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, define) in self.defines.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{define}")?;
        }
        Ok(())
    }
}
