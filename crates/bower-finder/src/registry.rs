//! Table of installed components
//!
//! Every component is reachable under its directory name and, when it
//! declares one, under its package name. Directory names take precedence:
//! a directory key is always written, a name key only when still free.

use indexmap::IndexMap;
use std::path::Path;

use crate::component::InstalledComponent;
use crate::error::{FinderError, Result};
use crate::paths::{base_name, concat_paths, COMPONENT_METADATA_FILE};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentRegistry {
    components: IndexMap<String, InstalledComponent>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `<component_path>/*/.bower.json` and register every match
    ///
    /// Fails when `component_path` is not a directory. A directory without
    /// any installed component yields an empty registry.
    pub fn scan(component_path: &str) -> Result<Self> {
        if !Path::new(component_path).is_dir() {
            return Err(FinderError::ComponentPathNotFound {
                path: component_path.to_string(),
            });
        }

        let mut registry = Self::new();
        for metadata_file in find_metadata_files(component_path)? {
            let directory = metadata_file
                .strip_suffix(COMPONENT_METADATA_FILE)
                .map(|dir| dir.trim_end_matches('/'))
                .unwrap_or(&metadata_file)
                .to_string();
            let dirname = base_name(&directory).to_string();

            let component = InstalledComponent::load(&metadata_file, &directory)?;
            registry.register(&dirname, component);
        }

        tracing::debug!(
            "Scanned {}: {} registry keys",
            component_path,
            registry.len()
        );
        Ok(registry)
    }

    /// Register a component under its directory name and declared name
    pub fn register(&mut self, dirname: &str, component: InstalledComponent) {
        let declared = component.name.clone();

        tracing::debug!("Registering component {} ({})", dirname, component.directory);
        self.components.insert(dirname.to_string(), component.clone());

        if let Some(name) = declared {
            if self.components.contains_key(&name) {
                if name != dirname {
                    tracing::warn!(
                        "Component {} declares name {}, which is already taken; only reachable as {}",
                        dirname,
                        name,
                        dirname
                    );
                }
            } else {
                self.components.insert(name, component);
            }
        }
    }

    /// Insert under a single key, replacing any previous entry
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        component: InstalledComponent,
    ) -> Option<InstalledComponent> {
        self.components.insert(key.into(), component)
    }

    /// Look up a component by directory or package name
    pub fn get(&self, name: &str) -> Result<&InstalledComponent> {
        self.components
            .get(name)
            .ok_or_else(|| FinderError::ComponentNotInstalled {
                name: name.to_string(),
                installed: self.keys().map(str::to_string).collect(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Registry keys in registration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InstalledComponent)> {
        self.components.iter().map(|(key, c)| (key.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl From<IndexMap<String, InstalledComponent>> for ComponentRegistry {
    fn from(components: IndexMap<String, InstalledComponent>) -> Self {
        Self { components }
    }
}

impl<K: Into<String>> FromIterator<(K, InstalledComponent)> for ComponentRegistry {
    fn from_iter<I: IntoIterator<Item = (K, InstalledComponent)>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().map(|(k, c)| (k.into(), c)).collect(),
        }
    }
}

/// Metadata files one level below `component_path`, sorted by directory name
///
/// Hidden directories are skipped, like a shell `*` wildcard would.
fn find_metadata_files(component_path: &str) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(component_path).map_err(|source| FinderError::Io {
        path: component_path.to_string(),
        source,
    })?;

    let mut dirnames = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| FinderError::Io {
            path: component_path.to_string(),
            source,
        })?;

        let Ok(dirname) = entry.file_name().into_string() else {
            tracing::warn!(
                "Skipping non UTF-8 entry in {}: {:?}",
                component_path,
                entry.file_name()
            );
            continue;
        };
        if dirname.starts_with('.') {
            continue;
        }
        if entry.path().join(COMPONENT_METADATA_FILE).is_file() {
            dirnames.push(dirname);
        }
    }
    dirnames.sort();

    Ok(dirnames
        .iter()
        .map(|dirname| concat_paths([component_path, dirname, COMPONENT_METADATA_FILE]))
        .collect())
}
