//! One merge cycle: snapshot, parse, commit.

use std::fs;

use parking_lot::Mutex;

use crate::config::HostfileConfig;
use crate::inventory::InventoryProvider;
use crate::parser::{HostfileError, parse_hostfile};
use crate::store::RecordSet;

/// Reconciles a hostfile against a node inventory.
///
/// `query` runs one cycle: take a snapshot from the provider, parse the
/// configured hostfile against it, and commit the resulting update set.
/// Cycles are serialized on an internal lock; the session value itself can
/// be shared freely.
pub struct MergeSession {
    config: HostfileConfig,
    lock: Mutex<()>,
}

impl MergeSession {
    pub fn new(config: HostfileConfig) -> Self {
        Self {
            config,
            lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &HostfileConfig {
        &self.config
    }

    /// Run one merge cycle against `provider`.
    ///
    /// A missing hostfile is an error unless the config marks it as a
    /// default file, in which case there is simply nothing to merge. Any
    /// parse error aborts the cycle with no inventory mutation; the commit
    /// happens only for a fully parsed file with a non-empty update set.
    pub fn query(&self, provider: &mut dyn InventoryProvider) -> Result<(), HostfileError> {
        let _guard = self.lock.lock();

        let mut existing = provider.query_snapshot()?;

        let path = &self.config.path;
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => {
                if self.config.is_default {
                    tracing::debug!("default hostfile {} not present, nothing to merge", path.display());
                    return Ok(());
                }
                tracing::error!("could not open hostfile {}", path.display());
                return Err(HostfileError::NotFound { path: path.clone() });
            }
        };

        let mut updates = RecordSet::new();
        if let Err(err) = parse_hostfile(&text, &mut existing, &mut updates) {
            tracing::error!("{}: {err}", path.display());
            return Err(err);
        }

        if !updates.is_empty() {
            tracing::debug!(
                "hostfile {} produced {} node update(s)",
                path.display(),
                updates.len()
            );
            provider.commit(updates)?;
        }
        // Unclaimed snapshot records are session-local working copies;
        // dropping them here is what marks those hosts as unchanged.
        Ok(())
    }

    /// Release the session. Nothing to tear down.
    pub fn finalize(&self) -> Result<(), HostfileError> {
        Ok(())
    }
}
