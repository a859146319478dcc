//! Lookup of symbols the compiled library already exports.
//!
//! Symbols found here are emitted by the normal object files and must not be
//! exported a second time from the inlines library.

use std::path::Path;

use rustc_hash::FxHashSet;

use crate::error::{InlinesError, Result};

/// Read-only view of the symbols a library already exports.
pub trait ExportedSymbols {
    /// Whether `mangled` is already exported.
    fn contains(&self, mangled: &str) -> bool;
}

/// Collaborator for libraries with nothing exported yet.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoExportedSymbols;

impl ExportedSymbols for NoExportedSymbols {
    fn contains(&self, _mangled: &str) -> bool {
        false
    }
}

/// A set of exported mangled names.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    symbols: FxHashSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one symbol per line. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    /// Read a symbol list file in the format accepted by [`SymbolTable::parse`].
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| InlinesError::ReadSymbols {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&text);
        tracing::debug!(path = %path.display(), symbols = table.len(), "loaded exported symbols");
        Ok(table)
    }

    /// Add a symbol. Returns `false` if it was already present.
    pub fn insert(&mut self, mangled: impl Into<String>) -> bool {
        self.symbols.insert(mangled.into())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl ExportedSymbols for SymbolTable {
    fn contains(&self, mangled: &str) -> bool {
        self.symbols.contains(mangled)
    }
}

impl<S: Into<String>> FromIterator<S> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for SymbolTable {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.symbols.extend(iter.into_iter().map(Into::into));
    }
}
