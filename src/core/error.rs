//! Error handling for mcpcfg
//!
//! Two layers, following the same split used throughout the codebase:
//!
//! 1. [`McpcfgError`] - strongly-typed failure modes for the configuration
//!    operations, so callers and tests can match on exactly what went wrong
//! 2. [`ErrorContext`] - a display wrapper that adds an actionable suggestion
//!    when the error reaches the CLI boundary
//!
//! Operations propagate `anyhow::Result` with `.with_context(...)` at call
//! sites; the typed enum sits underneath and is recovered by downcasting in
//! [`user_friendly_error`].
//!
//! All errors abort an operation before its final write. The only side
//! effect that may persist after a failure is the backup copy, which is
//! intentionally created first so the operator can always restore from it.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// Typed failure modes for configuration file operations.
#[derive(Error, Debug)]
pub enum McpcfgError {
    /// The file exists but is not valid JSON, or its root is not an object.
    #[error("malformed configuration document: {path}")]
    MalformedDocument {
        /// Path of the offending file
        path: String,
        /// Parser diagnostic describing what was wrong
        reason: String,
    },

    /// The path could not be read or written (permissions, missing parent
    /// directory, and similar I/O failures).
    #[error("file operation '{operation}' failed on {path}: {reason}")]
    IoFailure {
        /// Operation that failed ("read", "write", "backup")
        operation: String,
        /// Path the operation was applied to
        path: String,
        /// Underlying I/O diagnostic
        reason: String,
    },

    /// A removal targeted a server name that is not configured.
    #[error("MCP server '{name}' not found in {path}")]
    MissingEntry {
        /// Server name that was looked up
        name: String,
        /// Configuration file that was searched
        path: String,
    },

    /// The `--tool` value does not name a supported host application.
    #[error("unknown tool '{name}'")]
    UnknownTool {
        /// The unrecognized tool name
        name: String,
    },
}

/// An error bundled with user-facing guidance.
///
/// Built by [`user_friendly_error`] at the CLI boundary; `display` renders
/// the error chain, optional details, and an optional suggestion to stderr.
pub struct ErrorContext {
    /// The underlying error (with its full context chain)
    pub error: anyhow::Error,
    /// A short, actionable next step for the operator
    pub suggestion: Option<String>,
    /// Extra diagnostic detail worth showing below the message
    pub details: Option<String>,
}

impl ErrorContext {
    /// Wrap an error with no guidance attached yet.
    #[must_use]
    pub fn new(error: anyhow::Error) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Attach a suggestion line.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach a details block.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Render the error to stderr with color.
    pub fn display(&self) {
        eprintln!("{} {}", "error:".red().bold(), self.error);
        for cause in self.error.chain().skip(1) {
            eprintln!("  {} {}", "caused by:".yellow(), cause);
        }
        if let Some(details) = &self.details {
            eprintln!("\n{details}");
        }
        if let Some(suggestion) = &self.suggestion {
            eprintln!("\n{} {}", "hint:".cyan().bold(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nhint: {suggestion}")?;
        }
        Ok(())
    }
}

/// Convert any error into an [`ErrorContext`] with a suggestion matched to
/// the typed failure mode, when one is recognizable.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let (suggestion, details) = match error.downcast_ref::<McpcfgError>() {
        Some(McpcfgError::MalformedDocument { path, reason }) => (
            Some(format!(
                "Fix the JSON by hand, or restore the most recent {path}.backup-* copy"
            )),
            Some(reason.clone()),
        ),
        Some(McpcfgError::IoFailure { path, .. }) => (
            Some(format!(
                "Check that {path} exists and that you have permission to read and write it"
            )),
            None,
        ),
        Some(McpcfgError::MissingEntry { name, .. }) => (
            Some(format!(
                "Run `mcpcfg list` to see the configured servers; '{name}' is not one of them"
            )),
            None,
        ),
        Some(McpcfgError::UnknownTool { .. }) => {
            (Some("Supported tools are 'claude' and 'cursor'".to_string()), None)
        }
        None => (None, None),
    };

    let mut ctx = ErrorContext::new(error);
    if let Some(suggestion) = suggestion {
        ctx = ctx.with_suggestion(suggestion);
    }
    if let Some(details) = details {
        ctx = ctx.with_details(details);
    }
    ctx
}
