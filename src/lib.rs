//! Inline Exports
//!
//! Header-only C++ functions, variables and template specializations have no
//! out-of-line definition that the compiled objects of a shared library would
//! export. This crate finds them in a fully parsed library and writes:
//!
//! - `<name>.cpp`: an aggregation unit that includes the relevant headers and
//!   explicitly instantiates every usable specialization,
//! - `<name>.def` (ordinal ABIs) or `<name>.txt` (all others): the symbols the
//!   linker must export.
//!
//! # Example
//!
//! ```no_run
//! use inline_exports::{
//!     CppAbi, DeclarationInfo, Function, InlinesGenerator, InlinesOptions, Library,
//!     NoExportedSymbols, TranslationUnit, UnitInfo,
//! };
//!
//! let shape = UnitInfo::from_path("/include/shape.h");
//! let library = Library::new().with_unit(
//!     TranslationUnit::new(shape.clone())
//!         .with_decl(Function::new(DeclarationInfo::new("area", shape), "_Z4areav")),
//! );
//!
//! let options = InlinesOptions::new("out", "ShapeInlines", CppAbi::Itanium);
//! let generator = InlinesGenerator::new(options, &NoExportedSymbols)?;
//! let files = generator.generate(&library)?;
//! assert_eq!(files.symbols, 1);
//! # Ok::<(), inline_exports::InlinesError>(())
//! ```

mod generator;
mod options;

pub use generator::{GeneratedFiles, InlinesGenerator};
pub use options::InlinesOptions;

pub use inline_exports_codegen::{
    DEFAULT_EXPORT_ATTRIBUTE, InlinesOutput, InlinesPass, SkipReason,
    are_template_arguments_valid, render_aggregation_unit, render_export_manifest,
};
pub use inline_exports_core::{
    AccessSpecifier, Class, CppAbi, Decl, DeclarationInfo, ExportFormat, ExportedSymbols,
    Function, FunctionKind, InlinesError, Library, LibraryVisitor, Namespace, NoExportedSymbols,
    Result, SymbolTable, TemplateArgument, TemplateSpecializationType, TranslationUnit,
    TypeNodeId, TypeNodeIds, TypePrinter, TypeRef, UnitInfo, Variable, walk_library,
};
