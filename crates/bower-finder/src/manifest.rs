//! Project manifest (`bower.json`)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::component::Dependencies;
use crate::error::Result;
use crate::json::{load_json_file, null_as_default};
use crate::paths::{concat_paths, MANIFEST_FILE};

/// The project's own declared metadata
///
/// `dependencies` and `components` are always present after loading, even
/// when the file omits them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Direct dependencies of the project
    #[serde(default, deserialize_with = "null_as_default")]
    pub dependencies: Dependencies,

    /// Carried through untouched; resolution never reads it
    #[serde(default, deserialize_with = "null_as_default")]
    pub components: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Manifest {
    /// Load `<root>/bower.json`
    pub fn load(root_path: &str) -> Result<Self> {
        let path = concat_paths([root_path, MANIFEST_FILE]);
        tracing::debug!("Loading manifest from {}", path);
        load_json_file(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinderError;
    use tempfile::TempDir;

    fn root_with_manifest(content: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("bower.json"), content).unwrap();
        dir
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let dir = root_with_manifest(r#"{"name": "my-app"}"#);
        let manifest = Manifest::load(&dir.path().to_string_lossy()).unwrap();

        assert!(manifest.dependencies.is_empty());
        assert!(manifest.components.is_empty());
        assert_eq!(manifest.extra["name"], "my-app");
    }

    #[test]
    fn test_dependencies_are_loaded_in_order() {
        let dir = root_with_manifest(
            r#"{"dependencies": {"jquery": "~2.1", "bootstrap": "3.3.x"}, "components": {"x": 1}}"#,
        );
        let manifest = Manifest::load(&dir.path().to_string_lossy()).unwrap();

        let names: Vec<&str> = manifest.dependencies.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["jquery", "bootstrap"]);
        assert_eq!(manifest.dependencies["bootstrap"], "3.3.x");
        assert_eq!(manifest.components["x"], 1);
    }

    #[test]
    fn test_missing_manifest_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = Manifest::load(&dir.path().to_string_lossy()).unwrap_err();

        assert!(matches!(err, FinderError::FileNotFound { .. }));
        assert!(err.to_string().contains("bower.json"));
    }

    #[test]
    fn test_non_object_manifest_is_parse_error() {
        let dir = root_with_manifest(r#"["jquery"]"#);
        let err = Manifest::load(&dir.path().to_string_lossy()).unwrap_err();

        assert!(matches!(err, FinderError::Parse { .. }));
    }
}
