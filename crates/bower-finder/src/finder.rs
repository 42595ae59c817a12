//! The `BowerFinder` facade
//!
//! Holds the three lazily loaded artifacts (manifest, component path and
//! installed-components registry). Each is read from disk at most once, on
//! first access, and can be replaced up front through its setter to skip
//! the I/O entirely.
//!
//! The caches use single-threaded cells: a `BowerFinder` is `Send` but not
//! `Sync`. Populate it before sharing, or guard it with a lock.

use once_cell::unsync::OnceCell;

use crate::component::{Dependencies, InstalledComponent};
use crate::config::discover_component_path;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::registry::ComponentRegistry;
use crate::resolver::{ComponentNames, DependencyResolver, FileFilter};

const DEFAULT_ROOT: &str = ".";

#[derive(Debug)]
pub struct BowerFinder {
    root_path: String,
    manifest: OnceCell<Manifest>,
    component_path: OnceCell<String>,
    installed_components: OnceCell<ComponentRegistry>,
}

impl Default for BowerFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl BowerFinder {
    /// Finder rooted at the current directory
    pub fn new() -> Self {
        Self::with_root(DEFAULT_ROOT)
    }

    /// Finder rooted at `root_path`, the directory holding `bower.json`
    pub fn with_root(root_path: impl Into<String>) -> Self {
        let mut finder = Self {
            root_path: String::new(),
            manifest: OnceCell::new(),
            component_path: OnceCell::new(),
            installed_components: OnceCell::new(),
        };
        finder.set_root_path(root_path);
        finder
    }

    pub fn get_root_path(&self) -> &str {
        &self.root_path
    }

    /// Change the root; an empty path means the current directory
    ///
    /// Values already loaded from the previous root stay cached.
    pub fn set_root_path(&mut self, root_path: impl Into<String>) -> &mut Self {
        let root_path = root_path.into();
        self.root_path = if root_path.is_empty() {
            DEFAULT_ROOT.to_string()
        } else {
            root_path
        };
        self
    }

    /// Project manifest, loaded from `<root>/bower.json` on first access
    pub fn get_manifest(&self) -> Result<&Manifest> {
        self.manifest
            .get_or_try_init(|| Manifest::load(&self.root_path))
    }

    pub fn set_manifest(&mut self, manifest: Manifest) -> &mut Self {
        self.manifest = OnceCell::from(manifest);
        self
    }

    /// Where installed components live
    ///
    /// Taken from `.bowerrc` when it names a directory, otherwise
    /// `<root>/bower_components`. Never fails.
    pub fn get_component_path(&self) -> &str {
        self.component_path
            .get_or_init(|| {
                let path = discover_component_path(&self.root_path);
                tracing::debug!("Component path resolved to {}", path);
                path
            })
            .as_str()
    }

    pub fn set_component_path(&mut self, component_path: impl Into<String>) -> &mut Self {
        self.component_path = OnceCell::from(component_path.into());
        self
    }

    /// Registry of installed components, scanned on first access
    pub fn get_installed_components(&self) -> Result<&ComponentRegistry> {
        self.installed_components
            .get_or_try_init(|| ComponentRegistry::scan(self.get_component_path()))
    }

    pub fn set_installed_components(
        &mut self,
        installed_components: impl Into<ComponentRegistry>,
    ) -> &mut Self {
        self.installed_components = OnceCell::from(installed_components.into());
        self
    }

    /// Look up an installed component by directory or package name
    pub fn get_component(&self, name: &str) -> Result<&InstalledComponent> {
        self.get_installed_components()?.get(name)
    }

    /// Transitive dependencies of `name`, without `name` itself
    pub fn get_component_dependencies(&self, name: &str) -> Result<Dependencies> {
        DependencyResolver::new(self.get_installed_components()?).component_dependencies(name)
    }

    /// Entry-point files needed to load `name`
    pub fn get_dependent_files_for_component(
        &self,
        name: &str,
        filter: &FileFilter,
    ) -> Result<Vec<String>> {
        self.get_dependent_files_for_components(ComponentNames::single(name), filter)
    }

    /// Entry-point files needed to load all of `names`, each file once
    ///
    /// A plain string is split on commas, semicolons and whitespace.
    pub fn get_dependent_files_for_components(
        &self,
        names: impl Into<ComponentNames>,
        filter: &FileFilter,
    ) -> Result<Vec<String>> {
        let names = names.into();
        let registry = self.get_installed_components()?;

        let files = DependencyResolver::new(registry).dependent_files(&names, filter)?;
        tracing::debug!(
            "Resolved {} file(s) for {} requested component(s)",
            files.len(),
            names.len()
        );
        Ok(files)
    }

    /// Entry-point files for every direct dependency of the project manifest
    pub fn get_dependent_files_for_manifest(&self, filter: &FileFilter) -> Result<Vec<String>> {
        let names: ComponentNames = self
            .get_manifest()?
            .dependencies
            .keys()
            .map(String::as_str)
            .collect();
        self.get_dependent_files_for_components(names, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinderError;
    use std::path::Path;
    use tempfile::TempDir;

    fn scenario_registry() -> ComponentRegistry {
        [
            (
                "jquery",
                InstalledComponent::new("/c/jquery").with_main("jquery.js"),
            ),
            (
                "app",
                InstalledComponent::new("/c/app")
                    .with_dependency("jquery", "*")
                    .with_main("app.js"),
            ),
        ]
        .into_iter()
        .collect()
    }

    fn install(components_dir: &Path, dirname: &str, metadata: &str) {
        let dir = components_dir.join(dirname);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(".bower.json"), metadata).unwrap();
    }

    #[test]
    fn test_empty_root_means_current_dir() {
        let finder = BowerFinder::with_root("");
        assert_eq!(finder.get_root_path(), ".");
        assert_eq!(BowerFinder::new().get_root_path(), ".");
    }

    #[test]
    fn test_set_installed_components_skips_scan() {
        // Root does not exist; no scan may happen
        let mut finder = BowerFinder::with_root("/nonexistent/project");
        finder.set_installed_components(scenario_registry());

        let files = finder
            .get_dependent_files_for_component("app", &FileFilter::All)
            .unwrap();
        assert_eq!(files, vec!["/c/jquery/jquery.js", "/c/app/app.js"]);
    }

    #[test]
    fn test_missing_component_lists_known_keys() {
        let mut finder = BowerFinder::new();
        finder.set_installed_components(scenario_registry());

        let err = finder.get_component("missing").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Component missing is not installed. Installed are: jquery, app"
        );
    }

    #[test]
    fn test_set_manifest_skips_load() {
        let mut finder = BowerFinder::with_root("/nonexistent/project");
        let mut manifest = Manifest::default();
        manifest
            .dependencies
            .insert("jquery".to_string(), "~2.1".to_string());
        finder.set_manifest(manifest);

        assert_eq!(finder.get_manifest().unwrap().dependencies["jquery"], "~2.1");
    }

    #[test]
    fn test_set_component_path_skips_discovery() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".bowerrc"), r#"{"directory": "vendor"}"#).unwrap();

        let mut finder = BowerFinder::with_root(dir.path().to_string_lossy());
        finder.set_component_path("elsewhere");
        assert_eq!(finder.get_component_path(), "elsewhere");
    }

    #[test]
    fn test_component_path_is_cached() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_string_lossy().to_string();
        let finder = BowerFinder::with_root(root.clone());

        assert_eq!(finder.get_component_path(), format!("{}/bower_components", root));

        // A .bowerrc appearing later is not picked up
        std::fs::write(dir.path().join(".bowerrc"), r#"{"directory": "vendor"}"#).unwrap();
        assert_eq!(finder.get_component_path(), format!("{}/bower_components", root));
    }

    #[test]
    fn test_registry_is_scanned_once() {
        let dir = TempDir::new().unwrap();
        let components = dir.path().join("bower_components");
        install(&components, "jquery", r#"{"main": "jquery.js"}"#);

        let finder = BowerFinder::with_root(dir.path().to_string_lossy());
        assert_eq!(finder.get_installed_components().unwrap().len(), 1);

        install(&components, "moment", r#"{"main": "moment.js"}"#);
        assert_eq!(finder.get_installed_components().unwrap().len(), 1);
        assert!(finder.get_component("moment").unwrap_err().is_not_found());
    }

    #[test]
    fn test_missing_components_dir_fails() {
        let dir = TempDir::new().unwrap();
        let finder = BowerFinder::with_root(dir.path().to_string_lossy());

        let err = finder.get_installed_components().unwrap_err();
        assert!(matches!(err, FinderError::ComponentPathNotFound { .. }));
    }

    #[test]
    fn test_manifest_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("bower.json"),
            r#"{"dependencies": {"app": "*", "moment": "~2.10"}}"#,
        )
        .unwrap();

        let mut finder = BowerFinder::with_root(dir.path().to_string_lossy());
        let mut registry = scenario_registry();
        registry.insert(
            "moment",
            InstalledComponent::new("/c/moment").with_main("moment.js"),
        );
        finder.set_installed_components(registry);

        let files = finder
            .get_dependent_files_for_manifest(&FileFilter::All)
            .unwrap();
        assert_eq!(
            files,
            vec!["/c/jquery/jquery.js", "/c/app/app.js", "/c/moment/moment.js"]
        );
    }
}
