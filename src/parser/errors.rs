//! Error types for hostfile parsing and merging.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while parsing a hostfile or committing its result.
///
/// Every parse error is fatal to the whole file: either a full parse
/// succeeds and its update set is committed, or nothing is.
#[derive(Debug, Error)]
pub enum HostfileError {
    /// The hostfile does not exist (and is not an optional default file).
    #[error("hostfile not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Unexpected or malformed input.
    #[error("error reading hostfile at line {line}: {found}")]
    Syntax { line: u32, found: String },

    /// A hostfile naming `localhost` may not name any other host.
    #[error("line {line}: host '{host}' cannot be mixed with 'localhost' in one hostfile")]
    Exclusivity { line: u32, host: String },

    /// A slot cap below the host's slot count.
    #[error("line {line}: slots_max {given} is below the slot count {slots} for host '{host}'")]
    Bounds {
        line: u32,
        host: String,
        given: u32,
        slots: u32,
    },

    /// Failure reported by the inventory provider.
    #[error("inventory error: {0}")]
    Inventory(String),
}
