//! Root discovery and sentinel parsing through the public API.

use std::fs;

use pyjig::project::{self, ProjectType, SENTINEL_FILE};
use tempfile::TempDir;

const SENTINEL: &str =
    r#"{"project_type": "pkg", "project_name": "My Pkg", "project_slug": "my_pkg"}"#;

#[test]
fn test_locate_root_from_any_level() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(SENTINEL_FILE), SENTINEL).unwrap();

    let deep = tmp.path().join("src/my_pkg/nested");
    fs::create_dir_all(&deep).unwrap();

    let mut start = deep.clone();
    loop {
        let root = project::locate_root(&start).unwrap();
        assert_eq!(root.as_deref(), Some(tmp.path()), "from {}", start.display());
        if start == tmp.path() {
            break;
        }
        start = start.parent().unwrap().to_path_buf();
    }
}

#[test]
fn test_locate_root_without_sentinel() {
    let tmp = TempDir::new().unwrap();
    assert!(project::locate_root(tmp.path()).unwrap().is_none());
}

#[test]
fn test_discover_resolves_descriptor_once() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(SENTINEL_FILE), SENTINEL).unwrap();
    let sub = tmp.path().join("docs");
    fs::create_dir_all(&sub).unwrap();

    let found = project::discover(&sub).unwrap().expect("inside a project");
    assert_eq!(found.project_type, ProjectType::Pkg);
    assert_eq!(found.project_name, "My Pkg");
    assert_eq!(found.project_slug, "my_pkg");
    assert_eq!(found.root, tmp.path());

    // Outside any project the descriptor is absent, not an error
    let elsewhere = TempDir::new().unwrap();
    assert!(project::discover(elsewhere.path()).unwrap().is_none());
}

#[test]
fn test_descriptor_round_trip() {
    let tmp = TempDir::new().unwrap();
    let written = pyjig::Project::new(ProjectType::App, "Demo App", tmp.path());
    fs::create_dir_all(&written.root).unwrap();
    fs::write(
        written.root.join(SENTINEL_FILE),
        serde_json::to_string(&written).unwrap(),
    )
    .unwrap();

    let loaded = project::load(&written.root).unwrap();
    assert_eq!(loaded.project_type, ProjectType::App);
    assert_eq!(loaded.project_name, "Demo App");
    assert_eq!(loaded.project_slug, "demo_app");
    assert_eq!(loaded.root, written.root);
}
