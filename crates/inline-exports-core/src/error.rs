//! Error type for inline export generation.
//!
//! Classification never fails: declarations that cannot be exported are
//! skipped. Only I/O and invalid configuration surface as errors, and any
//! error fails the whole run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while generating inline export artifacts.
#[derive(Debug, Error)]
pub enum InlinesError {
    /// The output directory could not be created.
    #[error("failed to create output directory '{}': {source}", path.display())]
    CreateOutputDir { path: PathBuf, source: io::Error },

    /// An output file could not be written.
    #[error("failed to write '{}': {source}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    /// An exported-symbol list could not be read.
    #[error("failed to read symbol list '{}': {source}", path.display())]
    ReadSymbols { path: PathBuf, source: io::Error },

    /// The generator was configured with unusable options.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

impl InlinesError {
    /// The file system path involved, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            InlinesError::CreateOutputDir { path, .. }
            | InlinesError::WriteOutput { path, .. }
            | InlinesError::ReadSymbols { path, .. } => Some(path),
            InlinesError::InvalidOptions(_) => None,
        }
    }
}

/// Result alias for inline export generation.
pub type Result<T> = std::result::Result<T, InlinesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_display() {
        let err = InlinesError::WriteOutput {
            path: PathBuf::from("out/inlines.cpp"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to write 'out/inlines.cpp': denied");
        assert_eq!(err.path(), Some(&PathBuf::from("out/inlines.cpp")));
    }

    #[test]
    fn invalid_options_has_no_path() {
        let err = InlinesError::InvalidOptions("empty library name".into());
        assert_eq!(err.to_string(), "invalid options: empty library name");
        assert!(err.path().is_none());
    }
}
