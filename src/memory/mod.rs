//! Process memory access and snapshot buffers
//!
//! This module provides:
//! - The raw read primitive at the host boundary ([`ProcessMemory`])
//! - A region-map implementation for dumps and tests ([`MappedMemory`])
//! - The private snapshot buffer wrapper nodes own ([`MemoryBuffer`])

mod buffer;
mod source;

pub use buffer::MemoryBuffer;
pub use source::{MappedMemory, ProcessMemory};
