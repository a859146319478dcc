//! Generator configuration.

use std::path::{Path, PathBuf};

use inline_exports_codegen::DEFAULT_EXPORT_ATTRIBUTE;
use inline_exports_core::{CppAbi, ExportFormat, InlinesError, Result};

/// Where and how the inline export artifacts are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlinesOptions {
    /// Directory receiving the artifacts. Created if missing.
    pub output_dir: PathBuf,
    /// Base name of the inlines library; artifacts are `<name>.cpp` and
    /// `<name>.def` or `<name>.txt`.
    pub library_name: String,
    /// Target ABI, selecting the manifest format.
    pub abi: CppAbi,
    /// Attribute used on explicit instantiations.
    pub export_attribute: String,
}

impl InlinesOptions {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        library_name: impl Into<String>,
        abi: CppAbi,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            library_name: library_name.into(),
            abi,
            export_attribute: DEFAULT_EXPORT_ATTRIBUTE.to_string(),
        }
    }

    /// Override the attribute placed on explicit instantiations.
    pub fn with_export_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.export_attribute = attribute.into();
        self
    }

    /// Reject options that cannot produce well-formed file names.
    pub fn validate(&self) -> Result<()> {
        if self.library_name.trim().is_empty() {
            return Err(InlinesError::InvalidOptions(
                "inlines library name is empty".to_string(),
            ));
        }
        if self.library_name.contains(['/', '\\']) {
            return Err(InlinesError::InvalidOptions(format!(
                "inlines library name '{}' contains a path separator",
                self.library_name
            )));
        }
        if self.export_attribute.trim().is_empty() {
            return Err(InlinesError::InvalidOptions(
                "export attribute is empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn export_format(&self) -> ExportFormat {
        self.abi.export_format()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of `<name>.cpp`.
    pub fn aggregation_unit_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.cpp", self.library_name))
    }

    /// Path of `<name>.def` or `<name>.txt`, depending on the ABI.
    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir.join(format!(
            "{}.{}",
            self.library_name,
            self.export_format().extension()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_abi() {
        let options = InlinesOptions::new("out", "QtCoreInlines", CppAbi::Microsoft);
        assert_eq!(
            options.aggregation_unit_path(),
            Path::new("out").join("QtCoreInlines.cpp")
        );
        assert_eq!(
            options.manifest_path(),
            Path::new("out").join("QtCoreInlines.def")
        );

        let options = InlinesOptions::new("out", "QtCoreInlines", CppAbi::Itanium);
        assert_eq!(
            options.manifest_path(),
            Path::new("out").join("QtCoreInlines.txt")
        );
    }

    #[test]
    fn default_export_attribute() {
        let options = InlinesOptions::new("out", "lib", CppAbi::Itanium);
        assert_eq!(options.export_attribute, "__declspec(dllexport)");
        let options = options.with_export_attribute("EXPORT_API");
        assert_eq!(options.export_attribute, "EXPORT_API");
    }

    #[test]
    fn validate_rejects_bad_names() {
        assert!(InlinesOptions::new("out", "lib", CppAbi::Arm).validate().is_ok());
        assert!(matches!(
            InlinesOptions::new("out", "  ", CppAbi::Arm).validate(),
            Err(InlinesError::InvalidOptions(_))
        ));
        assert!(matches!(
            InlinesOptions::new("out", "sub/lib", CppAbi::Arm).validate(),
            Err(InlinesError::InvalidOptions(_))
        ));
        assert!(matches!(
            InlinesOptions::new("out", "lib", CppAbi::Arm)
                .with_export_attribute("")
                .validate(),
            Err(InlinesError::InvalidOptions(_))
        ));
    }
}
