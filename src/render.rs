//! Cookiecutter template invocation.
//!
//! Rendering is delegated to the external `cookiecutter` binary. Overrides
//! are passed as `key=value` extra context; the render happens inside an
//! explicitly given working directory via `Command::current_dir`.

use anyhow::{Context, Result};
use chrono::Datelike;
use std::collections::BTreeMap;
use std::path::Path;
use std::process::Command;

use crate::error::Error;

/// Remote templates the generator renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    App,
    Pkg,
    Source,
    Extension,
}

impl Template {
    /// Cookiecutter template identifier.
    pub fn repo(self) -> &'static str {
        match self {
            Template::App => "gh:jamercee/cookiecutter-pyapp",
            Template::Pkg => "gh:jamercee/cookiecutter-pypkg",
            Template::Source => "gh:jamercee/cookiecutter-pysource",
            Template::Extension => "gh:jamercee/cookiecutter-pyext",
        }
    }
}

/// Key/value overrides handed to the renderer as default answers.
pub type Overrides = BTreeMap<String, String>;

/// Current calendar year, as templates expect in their `year` field.
pub fn current_year() -> String {
    chrono::Local::now().year().to_string()
}

/// Render `template` inside `workdir`.
///
/// With `no_input` the renderer accepts its defaults instead of prompting;
/// otherwise it talks to the terminal directly. The renderer materializes a
/// directory named after the project/module in `workdir`, and is the one to
/// detect a pre-existing directory of that name.
pub fn render(
    template: Template,
    overrides: &Overrides,
    workdir: &Path,
    no_input: bool,
    debug: bool,
) -> Result<()> {
    let mut args: Vec<String> = vec![template.repo().to_string()];
    if no_input {
        args.push("--no-input".to_string());
    }
    args.extend(overrides.iter().map(|(key, value)| format!("{key}={value}")));

    if debug {
        println!(">>> cookiecutter {}", args.join(" "));
    }

    let status = Command::new("cookiecutter")
        .args(&args)
        .current_dir(workdir)
        .status()
        .context("Failed to run cookiecutter")?;

    if !status.success() {
        return Err(Error::tool_failure("cookiecutter", status).into());
    }
    Ok(())
}
