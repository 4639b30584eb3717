//! # clawprint-core
//!
//! Core types and utilities shared across all ClawPrint crates.
//!
//! This crate provides:
//! - `ClawPrintError` for unified error handling
//! - `ApiObject` and `Response<T>` envelopes over registry JSON
//! - Path encoding and pre-flight validation helpers
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `error`: Error types and result aliases
//! - `types`: Response envelopes
//! - `utils`: Utility functions and helpers

pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{ClawPrintError, ClawPrintResult, TransportKind};
pub use types::{ApiObject, Response};
