//! Composer autoload configuration.
//!
//! A project's `composer.json` tells us where its classes live.  Only the
//! PSR-4 maps of the `autoload` and `autoload-dev` sections are read:
//!
//! ```json
//! { "autoload": { "psr-4": { "App\\": "src/", "Lib\\": ["lib/", "legacy/"] } } }
//! ```
//!
//! Given `"App\\" => "src/"`, the class `App\Models\User` lives in
//! `<root>/src/Models/User.php`: the prefix is stripped, the remaining
//! namespace separators become directory separators, and `.php` is
//! appended.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::IgnoredAny;
use tracing::{debug, warn};

use crate::docblock;

/// A single PSR-4 namespace-to-directory mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Psr4Mapping {
    /// The namespace prefix, ending with `\` unless empty (e.g. `"App\"`).
    pub prefix: String,
    /// The base directory relative to the project root, ending with `/`
    /// unless empty (e.g. `"src/"`).
    pub base_path: String,
}

#[derive(Debug, Default, Deserialize)]
struct ComposerJson {
    #[serde(default)]
    autoload: AutoloadSection,
    #[serde(default, rename = "autoload-dev")]
    autoload_dev: AutoloadSection,
}

#[derive(Debug, Default, Deserialize)]
struct AutoloadSection {
    #[serde(default, rename = "psr-4")]
    psr4: BTreeMap<String, PathList>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PathList {
    One(String),
    Many(Vec<String>),
    Other(IgnoredAny),
}

/// Read `composer.json` under `project_root` and return its PSR-4
/// mappings, longest prefix first.
///
/// A missing or malformed file yields no mappings.
pub fn parse_composer_json(project_root: &Path) -> Vec<Psr4Mapping> {
    let path = project_root.join("composer.json");
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            debug!(path = %path.display(), %err, "no composer.json");
            return Vec::new();
        }
    };

    match parse_psr4_mappings(&content) {
        Ok(mappings) => mappings,
        Err(err) => {
            warn!(path = %path.display(), %err, "ignoring malformed composer.json");
            Vec::new()
        }
    }
}

/// Parse the PSR-4 mappings out of `composer.json` text.
pub fn parse_psr4_mappings(json: &str) -> Result<Vec<Psr4Mapping>, serde_json::Error> {
    let composer: ComposerJson = serde_json::from_str(json)?;

    let mut mappings = Vec::new();
    for section in [composer.autoload, composer.autoload_dev] {
        for (prefix, paths) in section.psr4 {
            let prefix = normalise_prefix(&prefix);
            let paths = match paths {
                PathList::One(path) => vec![path],
                PathList::Many(paths) => paths,
                PathList::Other(_) => continue,
            };
            mappings.extend(paths.iter().map(|path| Psr4Mapping {
                prefix: prefix.clone(),
                base_path: normalise_path(path),
            }));
        }
    }

    // Stable sort: directories of one prefix keep their listed order.
    mappings.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));
    Ok(mappings)
}

/// Ensure a non-empty prefix ends with `\`.
fn normalise_prefix(prefix: &str) -> String {
    if prefix.is_empty() || prefix.ends_with('\\') {
        prefix.to_string()
    } else {
        format!("{}\\", prefix)
    }
}

/// Use forward slashes and ensure a non-empty path ends with `/`.
fn normalise_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    if path.is_empty() || path.ends_with('/') {
        path
    } else {
        format!("{}/", path)
    }
}

/// Find the file that should define `class_name` under the PSR-4 rules.
///
/// Mappings are tried in order (longest prefix first); the first candidate
/// file that exists wins.  Type keywords never resolve.
pub fn resolve_class_path(
    mappings: &[Psr4Mapping],
    project_root: &Path,
    class_name: &str,
) -> Option<PathBuf> {
    let name = class_name.strip_prefix('\\').unwrap_or(class_name);
    if name.is_empty() || is_type_keyword(name) {
        return None;
    }

    mappings.iter().find_map(|mapping| {
        let relative = name.strip_prefix(mapping.prefix.as_str())?;
        let candidate = project_root
            .join(&mapping.base_path)
            .join(format!("{}.php", relative.replace('\\', "/")));
        candidate.is_file().then_some(candidate)
    })
}

fn is_type_keyword(name: &str) -> bool {
    docblock::is_primitive(name)
        || matches!(
            name.to_ascii_lowercase().as_str(),
            "self" | "static" | "parent" | "void" | "never" | "iterable"
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn project(composer_json: &str, files: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("composer.json"), composer_json)
            .expect("failed to write composer.json");
        for rel in files {
            let full = dir.path().join(rel);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).expect("failed to create dirs");
            }
            fs::write(&full, "<?php\n").expect("failed to write PHP file");
        }
        dir
    }

    #[test]
    fn both_sections_longest_prefix_first() {
        let mappings = parse_psr4_mappings(
            r#"{
                "autoload": { "psr-4": { "Shop\\": "src/" } },
                "autoload-dev": { "psr-4": { "Shop\\Tests\\": "tests" } }
            }"#,
        )
        .unwrap();
        assert_eq!(
            mappings,
            vec![
                Psr4Mapping {
                    prefix: "Shop\\Tests\\".to_string(),
                    base_path: "tests/".to_string(),
                },
                Psr4Mapping {
                    prefix: "Shop\\".to_string(),
                    base_path: "src/".to_string(),
                },
            ]
        );
    }

    #[test]
    fn path_lists_and_bad_entries() {
        let mappings = parse_psr4_mappings(
            r#"{ "autoload": { "psr-4": { "App": ["src", "lib\\"], "Odd\\": 42 } } }"#,
        )
        .unwrap();
        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings[0].prefix, "App\\");
        assert_eq!(mappings[0].base_path, "src/");
        assert_eq!(mappings[1].base_path, "lib/");
    }

    #[test]
    fn missing_or_invalid_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        assert!(parse_composer_json(dir.path()).is_empty());

        let broken = project("{ not json", &[]);
        assert!(parse_composer_json(broken.path()).is_empty());
    }

    #[test]
    fn resolves_nested_namespace() {
        let dir = project(
            r#"{ "autoload": { "psr-4": { "Shop\\": "src/" } } }"#,
            &["src/Catalog/Product.php"],
        );
        let mappings = parse_composer_json(dir.path());
        let path = resolve_class_path(&mappings, dir.path(), "\\Shop\\Catalog\\Product")
            .expect("class should resolve");
        assert!(path.ends_with("src/Catalog/Product.php"));
        assert!(resolve_class_path(&mappings, dir.path(), "Shop\\Missing").is_none());
        assert!(resolve_class_path(&mappings, dir.path(), "Other\\Product").is_none());
    }

    #[test]
    fn second_directory_of_a_prefix() {
        let dir = project(
            r#"{ "autoload": { "psr-4": { "App\\": ["src/", "lib/"] } } }"#,
            &["lib/Service.php"],
        );
        let mappings = parse_composer_json(dir.path());
        let path = resolve_class_path(&mappings, dir.path(), "App\\Service").unwrap();
        assert!(path.ends_with("lib/Service.php"));
    }

    #[test]
    fn keywords_never_resolve() {
        let dir = project(
            r#"{ "autoload": { "psr-4": { "": "src/" } } }"#,
            &["src/self.php", "src/string.php"],
        );
        let mappings = parse_composer_json(dir.path());
        assert!(resolve_class_path(&mappings, dir.path(), "self").is_none());
        assert!(resolve_class_path(&mappings, dir.path(), "string").is_none());
    }
}
