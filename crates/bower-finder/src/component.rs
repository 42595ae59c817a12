//! Installed component metadata (`<components>/<dir>/.bower.json`)

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::json::{load_json_file, null_as_default};

/// Dependency name → version constraint, in declaration order
///
/// Constraints are carried verbatim; they are never parsed or compared.
pub type Dependencies = IndexMap<String, String>;

/// Metadata of one component present on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstalledComponent {
    /// Declared package name, which may differ from the directory name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Install directory, derived from the location of the metadata file
    #[serde(default)]
    pub directory: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub dependencies: Dependencies,

    /// Entry-point files relative to `directory`
    #[serde(default, deserialize_with = "deserialize_main")]
    pub main: Vec<String>,

    /// Remaining metadata (version, resolution info, ...) kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InstalledComponent {
    /// Create an empty component installed in `directory`
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_dependency(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.dependencies.insert(name.into(), version.into());
        self
    }

    pub fn with_main(mut self, file: impl Into<String>) -> Self {
        self.main.push(file.into());
        self
    }

    /// Load a metadata file and bind it to its install directory
    ///
    /// The directory always comes from the caller: a `directory` key inside
    /// the file is ignored.
    pub fn load(metadata_file: &str, directory: &str) -> Result<Self> {
        let mut component: InstalledComponent = load_json_file(metadata_file)?;
        component.directory = directory.to_string();
        Ok(component)
    }
}

/// `main` is either a single path or a list of paths
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn deserialize_main<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(file)) => vec![file],
        Some(OneOrMany::Many(files)) => files,
        None => Vec::new(),
    })
}
