//! Create a new app or pkg project from its template.

use anyhow::Result;
use std::path::Path;

use pyjig::git;
use pyjig::project::{Project, ProjectType};
use pyjig::render::{self, Overrides, Template};

/// Render the project template in `workdir` and bring the resulting tree
/// under version control.
///
/// The template materializes the full project skeleton (gitignore, Makefile,
/// static-analysis configs, packaging descriptors, the `id.txt` sentinel and
/// the `docs/`, `src/`, `tests/` subtrees) at the slug-named directory.
pub fn execute(
    project: &Project,
    workdir: &Path,
    no_input: bool,
    exclude_git: bool,
    debug: bool,
) -> Result<()> {
    let mut overrides = Overrides::new();
    overrides.insert("project_type".to_string(), project.project_type.to_string());
    overrides.insert("project_name".to_string(), project.project_name.clone());
    overrides.insert("year".to_string(), render::current_year());

    let template = match project.project_type {
        ProjectType::App => Template::App,
        ProjectType::Pkg => Template::Pkg,
    };
    render::render(template, &overrides, workdir, no_input, debug)?;

    if exclude_git {
        return Ok(());
    }
    git::init_repo(&project.root)
}
