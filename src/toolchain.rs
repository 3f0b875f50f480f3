//! Preflight validation of the external toolchain.
//!
//! Every invocation depends on the template renderer, version control, and
//! the tools the generated project's own Makefile orchestrates. A missing
//! tool is reported before any project mutation begins.

use crate::error::Error;
use anyhow::Result;

/// External executables required on the search path.
pub const REQUIRED_TOOLS: [&str; 7] = [
    "cookiecutter",
    "flake8",
    "git",
    "make",
    "nosetests",
    "pylint",
    "sphinx-build",
];

/// Verify every required tool is present, failing on the first absence.
pub fn verify() -> Result<()> {
    for tool in REQUIRED_TOOLS {
        if which::which(tool).is_err() {
            return Err(Error::MissingTool(tool).into());
        }
    }
    Ok(())
}
