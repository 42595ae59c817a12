use thiserror::Error;

pub type Result<T> = std::result::Result<T, FinderError>;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Can't load JSON from {path}: file does not exist")]
    FileNotFound { path: String },

    #[error(
        "Component path not found: {path}. Please run `bower install` or `bower update` first"
    )]
    ComponentPathNotFound { path: String },

    #[error("Component {name} is not installed. Installed are: {}", installed.join(", "))]
    ComponentNotInstalled {
        name: String,
        installed: Vec<String>,
    },

    #[error("Can't load JSON from {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Can't load JSON from {path}: content is not UTF-8 compatible and can't be converted")]
    Encoding { path: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Dependency cycle detected: {}", chain.join(" -> "))]
    Cycle { chain: Vec<String> },

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FinderError {
    /// True for every "something is missing" failure: metadata files, the
    /// component directory and unknown component names.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FinderError::FileNotFound { .. }
                | FinderError::ComponentPathNotFound { .. }
                | FinderError::ComponentNotInstalled { .. }
        )
    }
}
