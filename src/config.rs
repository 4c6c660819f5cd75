//! Hostfile path configuration.

use std::path::PathBuf;

/// Where the hostfile lives and whether its absence is an error.
///
/// A *default* hostfile is a site-configured path that may legitimately not
/// exist; a missing default file yields an empty merge instead of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostfileConfig {
    pub path: PathBuf,
    pub is_default: bool,
}

impl HostfileConfig {
    /// A hostfile that must exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_default: false,
        }
    }

    /// A default hostfile; absence is not an error.
    pub fn default_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_default: true,
        }
    }
}
