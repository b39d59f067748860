//! Snapshot buffer owned by wrapper nodes

use super::source::ProcessMemory;
use crate::core::types::Address;
use tracing::debug;

/// Private snapshot of target process memory
///
/// A wrapper node refreshes its snapshot on every render while expanded,
/// then lets the inner node read from the copy instead of live memory.
/// Refreshing replaces the whole contents; a failed read zero-fills the
/// buffer and marks it stale rather than letting the error escape the
/// render path.
#[derive(Debug, Default)]
pub struct MemoryBuffer {
    data: Vec<u8>,
    stale: bool,
}

impl MemoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot size in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True when the last refresh could not read the target
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// The snapshot contents
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Replaces the snapshot with `size` bytes read from `address`
    pub fn update_from(&mut self, process: &dyn ProcessMemory, address: Address, size: usize) {
        if self.data.len() != size {
            self.data = vec![0; size];
        } else {
            self.data.fill(0);
        }

        match process.read_memory(address, &mut self.data) {
            Ok(()) => self.stale = false,
            Err(err) => {
                // Leave the zeroed contents visible instead of aborting the render
                self.data.fill(0);
                self.stale = true;
                debug!(target: "unreal_nodes", %address, %err, "snapshot refresh failed");
            }
        }
    }
}
