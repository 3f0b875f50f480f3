//! Error taxonomy for a pyjig invocation.
//!
//! Usage and environment errors are raised before any filesystem mutation;
//! tool failures abort the current operation with no retry and no rollback
//! of files already copied.

use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Conflicting or insufficient command-line flags.
    #[error("{0}")]
    Usage(String),

    /// A required external tool is absent from the search path.
    #[error("missing required component: {0}")]
    MissingTool(&'static str),

    /// An external tool exited with a non-zero status.
    #[error("{tool} exited with {status}")]
    ToolFailure { tool: String, status: ExitStatus },
}

impl Error {
    pub fn tool_failure(tool: impl Into<String>, status: ExitStatus) -> Self {
        Error::ToolFailure {
            tool: tool.into(),
            status,
        }
    }
}
