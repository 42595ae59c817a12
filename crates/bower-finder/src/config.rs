//! Component path discovery through the optional `.bowerrc`

use serde::Deserialize;
use std::path::Path;

use crate::error::Result;
use crate::json::load_json_file;
use crate::paths::{concat_paths, DEFAULT_COMPONENT_DIR, RC_FILE};

/// Root-level configuration file
///
/// Only `directory` matters here; every other key is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BowerRc {
    #[serde(default)]
    pub directory: Option<String>,
}

impl BowerRc {
    /// Load `<root>/.bowerrc`
    pub fn load(root_path: &str) -> Result<Self> {
        load_json_file(&concat_paths([root_path, RC_FILE]))
    }

    /// Components directory declared by this file, resolved against the root
    pub fn component_path(&self, root_path: &str) -> Option<String> {
        let directory = self.directory.as_deref().filter(|d| !d.is_empty())?;

        if Path::new(directory).is_absolute() {
            Some(concat_paths([directory]))
        } else {
            Some(concat_paths([root_path, directory]))
        }
    }
}

/// Resolve where installed components live
///
/// A missing or unreadable `.bowerrc` is not an error: it only means there is
/// no override and the default `<root>/bower_components` applies.
pub fn discover_component_path(root_path: &str) -> String {
    match BowerRc::load(root_path) {
        Ok(rc) => {
            if let Some(path) = rc.component_path(root_path) {
                tracing::debug!("Using component path {} from {}", path, RC_FILE);
                return path;
            }
            tracing::debug!("{} declares no directory", RC_FILE);
        }
        Err(e) => tracing::debug!("No usable {}: {}", RC_FILE, e),
    }

    concat_paths([root_path, DEFAULT_COMPONENT_DIR])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn root() -> (TempDir, String) {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_string_lossy().to_string();
        (dir, root)
    }

    #[test]
    fn test_default_without_bowerrc() {
        let (_dir, root) = root();
        assert_eq!(
            discover_component_path(&root),
            format!("{}/bower_components", root)
        );
    }

    #[test]
    fn test_directory_from_bowerrc() {
        let (dir, root) = root();
        std::fs::write(dir.path().join(".bowerrc"), r#"{"directory": "vendor"}"#).unwrap();

        assert_eq!(discover_component_path(&root), format!("{}/vendor", root));
    }

    #[test]
    fn test_bowerrc_without_directory_uses_default() {
        let (dir, root) = root();
        std::fs::write(
            dir.path().join(".bowerrc"),
            r#"{"registry": "https://registry.bower.io"}"#,
        )
        .unwrap();

        assert_eq!(
            discover_component_path(&root),
            format!("{}/bower_components", root)
        );
    }

    #[test]
    fn test_malformed_bowerrc_is_ignored() {
        let (dir, root) = root();
        std::fs::write(dir.path().join(".bowerrc"), "directory = vendor").unwrap();

        assert_eq!(
            discover_component_path(&root),
            format!("{}/bower_components", root)
        );
    }

    #[test]
    fn test_relative_root() {
        let rc = BowerRc {
            directory: Some("app/vendor/".to_string()),
        };
        assert_eq!(rc.component_path("."), Some("app/vendor".to_string()));
    }

    #[test]
    fn test_absolute_directory_is_kept() {
        let rc = BowerRc {
            directory: Some("/opt/components".to_string()),
        };
        assert_eq!(rc.component_path("/project"), Some("/opt/components".to_string()));
    }

    #[test]
    fn test_empty_directory_is_no_override() {
        let rc = BowerRc {
            directory: Some(String::new()),
        };
        assert_eq!(rc.component_path("."), None);
    }
}
