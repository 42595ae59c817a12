//! Resolve which files to load for a set of installed bower components
//!
//! Given component names, [`BowerFinder`] walks the installed components'
//! `.bower.json` metadata, expands their dependencies transitively and
//! returns the `main` files of every component involved, dependencies
//! first, each component once.
//!
//! ```no_run
//! use bower_finder::{BowerFinder, FileFilter};
//!
//! # fn main() -> bower_finder::Result<()> {
//! let finder = BowerFinder::with_root("/srv/my-app");
//! let scripts = finder.get_dependent_files_for_components(
//!     "bootstrap, moment",
//!     &FileFilter::extension("js"),
//! )?;
//! for script in scripts {
//!     println!("<script src=\"{}\"></script>", script);
//! }
//! # Ok(())
//! # }
//! ```

pub mod component;
pub mod config;
pub mod error;
pub mod finder;
mod json;
pub mod manifest;
pub mod paths;
pub mod registry;
pub mod resolver;

pub use component::{Dependencies, InstalledComponent};
pub use config::{discover_component_path, BowerRc};
pub use error::{FinderError, Result};
pub use finder::BowerFinder;
pub use manifest::Manifest;
pub use registry::ComponentRegistry;
pub use resolver::{ComponentNames, DependencyResolver, FileFilter};
