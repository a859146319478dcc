//! Inline Exports Core
//!
//! The resolved C++ declaration model consumed by the inline export
//! generator, together with the pieces every stage shares.
//!
//! ## Modules
//!
//! - [`unit`], [`decl`], [`types`], [`library`]: the parsed library
//! - [`printer`]: canonical C++ spelling of types
//! - [`visit`]: single-pass library traversal with a revisit guard
//! - [`symbols`]: lookup of symbols the compiled library already exports
//! - [`abi`]: target ABI and export manifest format
//! - [`error`]: unified error type

pub mod abi;
pub mod access;
pub mod decl;
pub mod error;
pub mod library;
pub mod printer;
pub mod symbols;
pub mod types;
pub mod unit;
pub mod visit;

pub use abi::{CppAbi, ExportFormat};
pub use access::AccessSpecifier;
pub use decl::{
    Class, Decl, DeclarationInfo, Field, Function, FunctionKind, MangledDecl, Namespace, Variable,
};
pub use error::{InlinesError, Result};
pub use library::{Library, TranslationUnit};
pub use printer::TypePrinter;
pub use symbols::{ExportedSymbols, NoExportedSymbols, SymbolTable};
pub use types::{TemplateArgument, TemplateSpecializationType, TypeNodeId, TypeNodeIds, TypeRef};
pub use unit::{PRIVATE_HEADER_SUFFIXES, UnitInfo};
pub use visit::{LibraryVisitor, walk_library};
