//! Utility functions and helpers.
//!
//! Common functionality used across multiple ClawPrint crates.

pub mod path;
pub mod validate;

// Re-export commonly used utilities
pub use path::{encode_path_segment, join_segment};
pub use validate::{require, require_list, require_range};
