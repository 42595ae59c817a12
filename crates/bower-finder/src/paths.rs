//! File names and string-level path joining
//!
//! Paths handed out by the finder are plain strings built by joining
//! segments, never by asking the filesystem. This keeps the output stable
//! (no canonicalization, no symlink resolution) and identical to what was
//! declared in the metadata files.

use once_cell::sync::Lazy;
use regex::Regex;

/// Project manifest, looked up under the root path
pub const MANIFEST_FILE: &str = "bower.json";

/// Optional root-level configuration file
pub const RC_FILE: &str = ".bowerrc";

/// Per-component metadata file written by the installer
pub const COMPONENT_METADATA_FILE: &str = ".bower.json";

/// Components directory used when `.bowerrc` does not name one
pub const DEFAULT_COMPONENT_DIR: &str = "bower_components";

static REPEATED_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\\/]{2,}").expect("separator pattern is valid"));

/// Join path segments with `/`
///
/// Each segment has runs of two or more separators (`/` or `\`) collapsed to
/// a single `/` and its trailing `/` stripped before joining. `.` segments
/// are dropped from the result, so `./bower.json` becomes `bower.json`.
///
/// # Examples
///
/// ```
/// use bower_finder::paths::concat_paths;
///
/// assert_eq!(concat_paths([".", "bower_components"]), "bower_components");
/// assert_eq!(concat_paths(["/c/jquery/", "dist//jquery.js"]), "/c/jquery/dist/jquery.js");
/// ```
pub fn concat_paths<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = segments
        .into_iter()
        .map(|segment| {
            REPEATED_SEPARATORS
                .replace_all(segment.as_ref(), "/")
                .trim_end_matches('/')
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("/");

    strip_dot_segments(&joined)
}

fn strip_dot_segments(path: &str) -> String {
    let kept: Vec<&str> = path.split('/').filter(|part| *part != ".").collect();
    let stripped = kept.join("/");

    if stripped.is_empty() && !path.is_empty() {
        // Only dot segments were present
        ".".to_string()
    } else {
        stripped
    }
}

/// Last segment of a `/`-joined path
pub(crate) fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
