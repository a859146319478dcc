//! Collection passes run during the library walk.
//!
//! - [`inlines`]: collect headers, template specializations and mangled
//!   symbols that need explicit export

pub mod inlines;

pub use inlines::{FxIndexSet, InlinesOutput, InlinesPass, SkipReason};
