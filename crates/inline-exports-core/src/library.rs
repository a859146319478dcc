//! A fully parsed library: the root of one traversal.

use crate::decl::Decl;
use crate::unit::UnitInfo;

/// One parsed header and its top-level declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationUnit {
    pub info: UnitInfo,
    pub decls: Vec<Decl>,
}

impl TranslationUnit {
    /// An empty unit.
    pub fn new(info: UnitInfo) -> Self {
        Self {
            info,
            decls: Vec::new(),
        }
    }

    /// Append a declaration.
    pub fn with_decl(mut self, decl: impl Into<Decl>) -> Self {
        self.decls.push(decl.into());
        self
    }

    pub fn push(&mut self, decl: impl Into<Decl>) {
        self.decls.push(decl.into());
    }
}

/// Every translation unit of the library, in parse order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    pub units: Vec<TranslationUnit>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(mut self, unit: TranslationUnit) -> Self {
        self.units.push(unit);
        self
    }

    pub fn push(&mut self, unit: TranslationUnit) {
        self.units.push(unit);
    }
}
