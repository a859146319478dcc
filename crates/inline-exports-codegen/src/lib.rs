//! Inline Exports Code Generation
//!
//! Collects the inline symbols and template specializations of a parsed C++
//! library that need explicit export, and renders the artifacts that force
//! them into a shared library.
//!
//! ## Architecture
//!
//! - **Collection**: [`InlinesPass`] runs during the single library walk and
//!   fills an [`InlinesOutput`]
//! - **Emission**: [`render_aggregation_unit`] and [`render_export_manifest`]
//!   turn that output into file contents
//!
//! ## Modules
//!
//! - [`template`]: template argument validation
//! - [`passes`]: the inline symbol collection pass
//! - [`emit`]: aggregation unit and export manifest rendering

pub mod emit;
pub mod passes;
pub mod template;

pub use emit::{DEFAULT_EXPORT_ATTRIBUTE, render_aggregation_unit, render_export_manifest};
pub use passes::{FxIndexSet, InlinesOutput, InlinesPass, SkipReason};
pub use template::{InvalidArgument, are_template_arguments_valid, find_invalid_argument};
