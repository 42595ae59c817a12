//! Transitive dependency expansion and entry-point file selection

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::component::{Dependencies, InstalledComponent};
use crate::error::{FinderError, Result};
use crate::paths::concat_paths;
use crate::registry::ComponentRegistry;

static NAME_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,\s;]+").expect("separator pattern is valid"));

/// Component names requested in one resolution call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentNames(Vec<String>);

impl ComponentNames {
    pub fn single(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    /// Split a list such as `"jquery, bootstrap;moment"` into names
    ///
    /// Any run of commas, semicolons and whitespace separates two names.
    /// Empty segments (leading or trailing separators) are dropped.
    pub fn parse(input: &str) -> Self {
        Self(
            NAME_SEPARATORS
                .split(input)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ComponentNames {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<String> for ComponentNames {
    fn from(input: String) -> Self {
        Self::parse(&input)
    }
}

impl From<Vec<String>> for ComponentNames {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl From<&[&str]> for ComponentNames {
    fn from(names: &[&str]) -> Self {
        names.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for ComponentNames {
    fn from(names: [&str; N]) -> Self {
        names.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ComponentNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for ComponentNames {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Names coming from untyped input: a delimited string or an array of strings
impl TryFrom<&Value> for ComponentNames {
    type Error = FinderError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(input) => Ok(Self::parse(input)),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        FinderError::InvalidArgument(format!(
                            "component names must be strings, got {}",
                            item
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(Self),
            other => Err(FinderError::InvalidArgument(format!(
                "component names must be a string or an array, got {}",
                other
            ))),
        }
    }
}

/// Decides which entry-point files are kept
#[derive(Default)]
pub enum FileFilter {
    /// Keep every file
    #[default]
    All,
    /// Keep files whose relative path matches
    Pattern(Regex),
    /// Keep files for which the predicate returns true
    Predicate(Box<dyn Fn(&str, &InstalledComponent) -> bool>),
}

impl FileFilter {
    pub fn pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern).map(Self::Pattern).map_err(|e| {
            FinderError::InvalidArgument(format!("invalid file pattern '{}': {}", pattern, e))
        })
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str, &InstalledComponent) -> bool + 'static,
    {
        Self::Predicate(Box::new(predicate))
    }

    /// Keep files with the given extension (`"js"` or `".js"`)
    pub fn extension(extension: &str) -> Self {
        let suffix = format!(".{}", extension.trim_start_matches('.'));
        Self::predicate(move |file, _| file.ends_with(&suffix))
    }

    pub fn matches(&self, file: &str, component: &InstalledComponent) -> bool {
        match self {
            FileFilter::All => true,
            FileFilter::Pattern(pattern) => pattern.is_match(file),
            FileFilter::Predicate(predicate) => predicate(file, component),
        }
    }
}

impl fmt::Debug for FileFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFilter::All => f.write_str("All"),
            FileFilter::Pattern(pattern) => {
                f.debug_tuple("Pattern").field(&pattern.as_str()).finish()
            }
            FileFilter::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Walks a registry to compute dependency closures and file lists
///
/// Expansion results are memoized per resolver, so a shared dependency is
/// expanded once no matter how many components reach it.
pub struct DependencyResolver<'a> {
    registry: &'a ComponentRegistry,
    expanded: HashMap<String, Dependencies>,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(registry: &'a ComponentRegistry) -> Self {
        Self {
            registry,
            expanded: HashMap::new(),
        }
    }

    /// Full transitive dependency set of `name`, excluding `name` itself
    ///
    /// For each direct dependency the recursive result is laid down first
    /// and the dependencies collected so far are layered on top, so a direct
    /// entry keeps its own constraint over one found deeper. Deeper
    /// dependencies come before the ones that need them.
    pub fn component_dependencies(&mut self, name: &str) -> Result<Dependencies> {
        let mut stack = Vec::new();
        self.expand(name, &mut stack)
    }

    fn expand(&mut self, name: &str, stack: &mut Vec<String>) -> Result<Dependencies> {
        if let Some(start) = stack.iter().position(|n| n == name) {
            let mut chain = stack[start..].to_vec();
            chain.push(name.to_string());
            return Err(FinderError::Cycle { chain });
        }
        if let Some(done) = self.expanded.get(name) {
            return Ok(done.clone());
        }

        let direct = self.registry.get(name)?.dependencies.clone();
        stack.push(name.to_string());

        let mut dependencies = direct.clone();
        for dependency_name in direct.keys() {
            tracing::trace!("Expanding {} -> {}", name, dependency_name);
            let mut merged = self.expand(dependency_name, stack)?;
            for (key, version) in dependencies {
                merged.insert(key, version);
            }
            dependencies = merged;
        }

        stack.pop();
        self.expanded.insert(name.to_string(), dependencies.clone());
        Ok(dependencies)
    }

    /// Entry-point files for `names` and everything they depend on
    ///
    /// Order: requested names as given; for each, its dependencies then the
    /// component itself; for each component, its `main` entries as declared.
    /// A component already emitted during this call is not emitted again.
    pub fn dependent_files(
        &mut self,
        names: &ComponentNames,
        filter: &FileFilter,
    ) -> Result<Vec<String>> {
        let mut files = Vec::new();
        let mut handled: HashSet<String> = HashSet::new();

        for requested in names.iter() {
            let dependencies = self.component_dependencies(requested)?;
            let closure = dependencies
                .keys()
                .map(String::as_str)
                .chain(std::iter::once(requested));

            for dependency_name in closure {
                if !handled.insert(dependency_name.to_string()) {
                    continue;
                }

                let component = self.registry.get(dependency_name)?;
                for file in &component.main {
                    if filter.matches(file, component) {
                        files.push(concat_paths([component.directory.as_str(), file]));
                    }
                }
            }
        }

        Ok(files)
    }
}
