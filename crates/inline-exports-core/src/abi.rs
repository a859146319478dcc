//! Target C++ ABIs and the export manifest format each one uses.

use std::fmt;

/// C++ ABI of the target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CppAbi {
    #[default]
    Itanium,
    Microsoft,
    Arm,
    IOS,
    IOS64,
}

impl CppAbi {
    /// Whether exports are declared with ordinals in a module-definition file.
    pub fn uses_ordinals(self) -> bool {
        matches!(self, CppAbi::Microsoft)
    }

    /// The manifest format the linker for this ABI expects.
    pub fn export_format(self) -> ExportFormat {
        if self.uses_ordinals() {
            ExportFormat::ModuleDefinition
        } else {
            ExportFormat::SymbolList
        }
    }
}

impl fmt::Display for CppAbi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CppAbi::Itanium => "itanium",
            CppAbi::Microsoft => "microsoft",
            CppAbi::Arm => "arm",
            CppAbi::IOS => "ios",
            CppAbi::IOS64 => "ios64",
        };
        f.write_str(name)
    }
}

/// Layout of the export manifest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// `EXPORTS` followed by `name @ordinal` lines, CRLF terminated.
    ModuleDefinition,
    /// One symbol per line, LF terminated.
    SymbolList,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::ModuleDefinition => "def",
            ExportFormat::SymbolList => "txt",
        }
    }

    pub fn line_ending(self) -> &'static str {
        match self {
            ExportFormat::ModuleDefinition => "\r\n",
            ExportFormat::SymbolList => "\n",
        }
    }
}
