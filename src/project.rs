//! Project identity and root discovery.
//!
//! A generated project is marked by an `id.txt` sentinel file at its root,
//! written by the project template at creation time. The sentinel is the
//! single source of truth for "is this directory a project, and what kind";
//! everything else is derived per invocation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Sentinel file marking a project root.
pub const SENTINEL_FILE: &str = "id.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    App,
    Pkg,
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectType::App => write!(f, "app"),
            ProjectType::Pkg => write!(f, "pkg"),
        }
    }
}

/// Identity of a generated project, as recorded in its sentinel file.
///
/// Resolved once at the start of an invocation and threaded through the
/// subsequent operations as an immutable value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub project_type: ProjectType,
    pub project_name: String,
    pub project_slug: String,
    /// Root directory, derived from the sentinel location. Not serialized.
    #[serde(skip)]
    pub root: PathBuf,
}

impl Project {
    /// Describe a project about to be created under `parent`.
    pub fn new(project_type: ProjectType, name: &str, parent: &Path) -> Self {
        let slug = slugify(name);
        Project {
            project_type,
            project_name: name.to_string(),
            root: parent.join(&slug),
            project_slug: slug,
        }
    }

    pub fn src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.root.join("docs")
    }

    pub fn tests_dir(&self) -> PathBuf {
        self.root.join("tests")
    }
}

/// Normalize a project name into a directory/module slug.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Find a project root by walking up from `start` looking for the sentinel
/// file. Returns `None` when the filesystem root is reached without a match.
pub fn locate_root(start: &Path) -> Result<Option<PathBuf>> {
    let mut current = start.to_path_buf();

    loop {
        let sentinel = current.join(SENTINEL_FILE);
        if sentinel
            .try_exists()
            .with_context(|| format!("Failed to probe {}", sentinel.display()))?
        {
            return Ok(Some(current));
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return Ok(None),
        }
    }
}

/// Read the sentinel file at `root`.
pub fn load(root: &Path) -> Result<Project> {
    let path = root.join(SENTINEL_FILE);
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read project sentinel: {}", path.display()))?;

    let mut project: Project = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse project sentinel: {}", path.display()))?;
    project.root = root.to_path_buf();
    Ok(project)
}

/// Resolve the project containing `start`, if any.
pub fn discover(start: &Path) -> Result<Option<Project>> {
    match locate_root(start)? {
        Some(root) => load(&root).map(Some),
        None => Ok(None),
    }
}
