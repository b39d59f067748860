//! Read primitive over the inspected process

use crate::core::types::{Address, MemoryError, MemoryResult};

/// Raw byte-read capability supplied by the host inspector
///
/// The failure semantics belong to the implementation: a read may fail
/// outright, or succeed with a partially filled buffer where unmapped
/// bytes are zeroed. Callers on the render path must degrade instead of
/// propagating.
pub trait ProcessMemory {
    /// Reads `buf.len()` bytes starting at `address` into `buf`
    fn read_memory(&self, address: Address, buf: &mut [u8]) -> MemoryResult<()>;
}

/// In-memory implementation backed by a set of mapped regions
///
/// Replays captured dumps and drives deterministic tests. A read entirely
/// outside every region fails; a read that starts inside a region
/// zero-fills whatever runs past its end.
#[derive(Debug, Default)]
pub struct MappedMemory {
    regions: Vec<(Address, Vec<u8>)>,
}

impl MappedMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `bytes` at `base`; later mappings win on overlap
    pub fn map(&mut self, base: Address, bytes: impl Into<Vec<u8>>) {
        self.regions.push((base, bytes.into()));
    }

    fn region_containing(&self, address: Address) -> Option<(Address, &[u8])> {
        self.regions
            .iter()
            .rev()
            .find(|(base, bytes)| {
                address.as_usize() >= base.as_usize()
                    && address.as_usize() < base.as_usize() + bytes.len()
            })
            .map(|(base, bytes)| (*base, bytes.as_slice()))
    }
}

impl ProcessMemory for MappedMemory {
    fn read_memory(&self, address: Address, buf: &mut [u8]) -> MemoryResult<()> {
        if buf.is_empty() {
            return Ok(());
        }
        let (base, bytes) = self
            .region_containing(address)
            .ok_or_else(|| MemoryError::read_failed(address, "address not mapped"))?;

        let start = address.as_usize() - base.as_usize();
        let available = (bytes.len() - start).min(buf.len());
        buf[..available].copy_from_slice(&bytes[start..start + available]);
        buf[available..].fill(0);
        Ok(())
    }
}
