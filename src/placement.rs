//! File placement for rendered modules.
//!
//! The renderer leaves its output in a scratch directory under a
//! subdirectory named after the module. From there a fixed, kind-dependent
//! plan decides which files move where: the module itself into `src/` (or
//! the bare target directory when outside a project), its documentation
//! fragment into `docs/`, its test stub into `tests/`. A destination that
//! already exists is never overwritten, which makes re-running an add
//! idempotent instead of destructive.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::project::Project;
use crate::render::Template;

/// Kind of module being added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    Source,
    Extension,
}

impl ModuleKind {
    pub fn template(self) -> Template {
        match self {
            ModuleKind::Source => Template::Source,
            ModuleKind::Extension => Template::Extension,
        }
    }

    /// Rendered file names for the module itself, in preference order.
    /// Extensions prefer the native-interop variant over plain C.
    fn candidates(self, module: &str) -> Vec<String> {
        match self {
            ModuleKind::Source => vec![format!("{module}.py")],
            ModuleKind::Extension => vec![format!("{module}.pyx"), format!("{module}.c")],
        }
    }
}

/// One rendered file and the destination it lands at.
#[derive(Debug)]
pub struct Placement {
    pub rendered: PathBuf,
    pub dest: PathBuf,
}

/// Strip a known template extension from a requested module name.
pub fn module_stem(name: &str) -> &str {
    for ext in [".py", ".pyx", ".c"] {
        if let Some(stem) = name.strip_suffix(ext) {
            return stem;
        }
    }
    name
}

/// Build the placement plan for one rendered module.
///
/// `render_dir` is the scratch directory the renderer ran in; its output
/// lives at `render_dir/<module>/`. The doc fragment and test stub are
/// planned only inside a project, and only when the project actually has
/// the matching subdirectory.
pub fn placements(
    render_dir: &Path,
    module: &str,
    kind: ModuleKind,
    target_dir: &Path,
    project: Option<&Project>,
) -> Result<Vec<Placement>> {
    let out = render_dir.join(module);

    let name = kind
        .candidates(module)
        .into_iter()
        .find(|name| out.join(name).is_file())
        .with_context(|| {
            format!(
                "Renderer produced no output for module '{}' in {}",
                module,
                out.display()
            )
        })?;

    let mut plan = vec![Placement {
        rendered: out.join(&name),
        dest: target_dir.join(&name),
    }];

    if let Some(project) = project {
        let doc = format!("{module}.rst");
        if project.docs_dir().is_dir() && out.join(&doc).is_file() {
            plan.push(Placement {
                rendered: out.join(&doc),
                dest: project.docs_dir().join(&doc),
            });
        }

        let test = format!("test_{module}.py");
        if project.tests_dir().is_dir() && out.join(&test).is_file() {
            plan.push(Placement {
                rendered: out.join(&test),
                dest: project.tests_dir().join(&test),
            });
        }
    }

    Ok(plan)
}

/// Copy a placement unless its destination already exists.
///
/// Returns true when a copy happened.
pub fn copy_if_absent(placement: &Placement, debug: bool) -> Result<bool> {
    if placement.dest.exists() {
        if debug {
            println!(">>> {} exists, left untouched", placement.dest.display());
        }
        return Ok(false);
    }

    fs::copy(&placement.rendered, &placement.dest).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            placement.rendered.display(),
            placement.dest.display()
        )
    })?;
    Ok(true)
}
