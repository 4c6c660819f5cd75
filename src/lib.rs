//! # hostfile
//!
//! Hostfile parsing and cluster node-inventory reconciliation.
//!
//! A hostfile is a line-oriented text file enumerating compute hosts and
//! their execution-slot capacities. This crate parses one and merges the
//! result against an existing node inventory, producing the minimal ordered
//! set of new or changed node records to commit.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! session    → MergeSession: one query cycle (lock, snapshot, parse, commit)
//!   ↓
//! parser     → Logos lexer, token-stream line/file parser, HostfileError
//!   ↓
//! inventory  → InventoryProvider trait, in-memory registry
//!   ↓
//! config     → HostfileConfig: path + optional-default flag
//!   ↓
//! store      → NodeRecord, RecordSet claim/append working collections
//! ```

/// Node records and the claim/append working collections
pub mod store;

/// Hostfile path configuration
pub mod config;

/// Inventory provider seam and the in-memory registry
pub mod inventory;

/// Parser: Logos lexer, line/file parser, error types
pub mod parser;

/// Merge session: snapshot, parse, commit under an exclusive lock
pub mod session;

// Re-export commonly needed items
pub use config::HostfileConfig;
pub use inventory::{InMemoryInventory, InventoryProvider};
pub use parser::{HostfileError, parse_hostfile};
pub use session::MergeSession;
pub use store::{NodeRecord, RecordSet};
