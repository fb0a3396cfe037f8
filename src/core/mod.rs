//! Core types shared across mcpcfg
//!
//! Currently this is the error taxonomy and the user-facing error rendering
//! used by the CLI entry point.

pub mod error;

pub use error::{ErrorContext, McpcfgError, user_friendly_error};
