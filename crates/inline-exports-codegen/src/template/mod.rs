//! Template specialization support.
//!
//! - [`are_template_arguments_valid`]: decide whether a specialization can be
//!   explicitly instantiated in a standalone translation unit

mod validation;

pub use validation::{InvalidArgument, are_template_arguments_valid, find_invalid_argument};
