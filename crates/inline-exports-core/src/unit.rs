//! Translation unit identity.
//!
//! A unit is identified by its absolute path and the file name used when
//! including it from generated code. Units whose path carries one of the
//! [`PRIVATE_HEADER_SUFFIXES`] hold implementation details and never
//! contribute their own header or symbols to the public export surface.

use std::fmt;

/// File-name suffixes that mark a header as private implementation.
pub const PRIVATE_HEADER_SUFFIXES: [&str; 2] = ["_impl.h", "_p.h"];

/// Path and display name of a translation unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitInfo {
    /// Absolute path of the parsed file.
    pub file_path: String,
    /// Name written into include directives.
    pub file_name: String,
}

impl UnitInfo {
    /// Create a unit from its path and include name.
    pub fn new(file_path: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            file_name: file_name.into(),
        }
    }

    /// Create a unit whose include name is the last component of `file_path`.
    pub fn from_path(file_path: impl Into<String>) -> Self {
        let file_path = file_path.into();
        let file_name = file_path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(file_path.as_str())
            .to_string();
        Self {
            file_path,
            file_name,
        }
    }

    /// Whether this unit is a private-implementation header.
    pub fn is_private_implementation(&self) -> bool {
        PRIVATE_HEADER_SUFFIXES
            .iter()
            .any(|suffix| self.file_path.ends_with(suffix))
    }
}

impl fmt::Display for UnitInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_path)
    }
}
