//! Locations of the two JSON documents that drive the app.

/// Filename of the general configuration document
pub const CONFIG_DOCUMENT: &str = "data.json";

/// Filename of the program catalog document
pub const PROGRAM_DOCUMENT: &str = "program.json";

/// Root used when no --source-root is given: a `json/` directory
/// next to the working directory, the layout the repo ships with.
pub const DEFAULT_SOURCE_ROOT: &str = "json";

/// Resolved locations of both documents.
///
/// The root may be an http(s) URL (a deployment serving the documents) or a
/// local directory. Trailing slashes on the root are ignored so
/// `--source-root https://example.org/gen/` and `.../gen` resolve the same.
#[derive(Debug, Clone)]
pub struct DataSources {
    pub config_location: String,
    pub program_location: String,
}

impl DataSources {
    pub fn resolve(root: &str) -> Self {
        let root = root.trim_end_matches('/');
        Self {
            config_location: format!("{root}/{CONFIG_DOCUMENT}"),
            program_location: format!("{root}/{PROGRAM_DOCUMENT}"),
        }
    }
}
