//! Generator entry point.
//!
//! Runs the single library walk, then writes the aggregation unit and the
//! export manifest. Any I/O failure aborts the run; files already written by
//! a failed run must not be trusted.

use std::fs;
use std::path::{Path, PathBuf};

use inline_exports_codegen::{
    InlinesOutput, InlinesPass, render_aggregation_unit, render_export_manifest,
};
use inline_exports_core::{ExportFormat, ExportedSymbols, InlinesError, Library, Result};

use crate::options::InlinesOptions;

/// Files written by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    /// `<name>.cpp`
    pub aggregation_unit: PathBuf,
    /// `<name>.def` or `<name>.txt`
    pub manifest: PathBuf,
    pub format: ExportFormat,
    pub headers: usize,
    pub templates: usize,
    pub symbols: usize,
}

/// Generates inline export artifacts for a parsed library.
pub struct InlinesGenerator<'a> {
    options: InlinesOptions,
    symbols: &'a dyn ExportedSymbols,
}

impl<'a> InlinesGenerator<'a> {
    /// Create a generator. `symbols` lists what the compiled library already
    /// exports.
    pub fn new(options: InlinesOptions, symbols: &'a dyn ExportedSymbols) -> Result<Self> {
        options.validate()?;
        Ok(Self { options, symbols })
    }

    pub fn options(&self) -> &InlinesOptions {
        &self.options
    }

    /// Walk the library and collect what needs exporting.
    pub fn collect(&self, library: &Library) -> InlinesOutput {
        InlinesPass::new(self.symbols).run(library)
    }

    /// Write both artifacts for previously collected output.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn write(&self, output: &InlinesOutput) -> Result<GeneratedFiles> {
        let dir = self.options.output_dir();
        fs::create_dir_all(dir).map_err(|source| InlinesError::CreateOutputDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let aggregation_unit = self.options.aggregation_unit_path();
        let cpp = render_aggregation_unit(
            output.headers.iter().map(String::as_str),
            output.templates.iter().map(String::as_str),
            &self.options.export_attribute,
        );
        write_file(&aggregation_unit, &cpp)?;

        let format = self.options.export_format();
        let manifest = self.options.manifest_path();
        let text =
            render_export_manifest(output.mangled_inlines.iter().map(String::as_str), format);
        write_file(&manifest, &text)?;

        let files = GeneratedFiles {
            aggregation_unit,
            manifest,
            format,
            headers: output.headers.len(),
            templates: output.templates.len(),
            symbols: output.mangled_inlines.len(),
        };
        tracing::info!(
            abi = %self.options.abi,
            aggregation_unit = %files.aggregation_unit.display(),
            manifest = %files.manifest.display(),
            headers = files.headers,
            templates = files.templates,
            symbols = files.symbols,
            "wrote inline export artifacts"
        );
        Ok(files)
    }

    /// Collect from `library` and write both artifacts.
    pub fn generate(&self, library: &Library) -> Result<GeneratedFiles> {
        let output = self.collect(library);
        self.write(&output)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| InlinesError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
