#![allow(dead_code)]

use phpantom_reflection::Workspace;
use std::fs;

/// Helper: a workspace holding the given `(uri, source)` files.
pub fn create_workspace(files: &[(&str, &str)]) -> Workspace {
    let workspace = Workspace::new();
    for (uri, content) in files {
        workspace.add_file(uri, content);
    }
    workspace
}

/// Helper: create a temp project with a composer.json and PHP files,
/// then return a Workspace that autoloads from it through PSR-4.
pub fn create_psr4_workspace(
    composer_json: &str,
    files: &[(&str, &str)],
) -> (Workspace, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join("composer.json"), composer_json)
        .expect("failed to write composer.json");
    for (rel_path, content) in files {
        let full = dir.path().join(rel_path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("failed to create dirs");
        }
        fs::write(&full, content).expect("failed to write PHP file");
    }

    let workspace = Workspace::with_composer(dir.path());
    (workspace, dir)
}

/// Property names in order.
pub fn names(properties: &[phpantom_reflection::PropertyDescriptor]) -> Vec<&str> {
    properties.iter().map(|p| p.name()).collect()
}
