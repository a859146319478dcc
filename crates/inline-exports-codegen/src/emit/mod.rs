//! Artifact rendering.
//!
//! - [`aggregation`]: the synthetic translation unit that includes every
//!   collected header and explicitly instantiates every specialization
//! - [`manifest`]: the linker export manifest for the target ABI

pub mod aggregation;
pub mod manifest;

pub use aggregation::{DEFAULT_EXPORT_ATTRIBUTE, render_aggregation_unit};
pub use manifest::render_export_manifest;
