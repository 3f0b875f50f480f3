//! Add source or extension modules to a project, or to a bare directory.

use anyhow::{Context, Result};
use std::path::Path;
use tempfile::TempDir;

use pyjig::git;
use pyjig::placement::{self, ModuleKind};
use pyjig::project::Project;
use pyjig::render::{self, Overrides};

/// Render each requested module into a fresh scratch directory and copy the
/// outputs into place.
///
/// Inside a project the module lands in `src/`, its doc fragment in `docs/`
/// and its test stub in `tests/`; outside one only the module itself is
/// written, into the current directory. Existing destinations are left
/// untouched. The scratch directory is removed on every exit path. A
/// renderer failure aborts the remaining modules; files already copied stay.
pub fn execute(
    modules: &[String],
    kind: ModuleKind,
    project: Option<&Project>,
    cwd: &Path,
    no_input: bool,
    exclude_git: bool,
    debug: bool,
) -> Result<()> {
    let target_dir = match project {
        Some(project) => project.src_dir(),
        None => cwd.to_path_buf(),
    };

    let mut base = Overrides::new();
    if let Some(project) = project {
        base.insert("project_type".to_string(), project.project_type.to_string());
        base.insert("project_name".to_string(), project.project_name.clone());
        base.insert("project_slug".to_string(), project.project_slug.clone());
    }
    base.insert("year".to_string(), render::current_year());

    for name in modules {
        let module = placement::module_stem(name);

        let mut overrides = base.clone();
        overrides.insert("module".to_string(), module.to_string());

        // Scratch directory is removed on drop, success or failure
        let scratch = TempDir::new().context("Failed to create scratch directory")?;
        render::render(kind.template(), &overrides, scratch.path(), no_input, debug)?;

        let plan = placement::placements(scratch.path(), module, kind, &target_dir, project)?;
        for entry in &plan {
            if placement::copy_if_absent(entry, debug)? {
                println!("✓ {}", entry.dest.display());
            }
        }
    }

    if let Some(project) = project {
        if !exclude_git {
            git::add_all(&project.root)?;
        }
    }
    Ok(())
}
