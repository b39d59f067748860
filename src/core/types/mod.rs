//! Fundamental types for memory inspection

mod address;
mod error;

pub use address::Address;
pub use error::{MemoryError, MemoryResult};

/// Pointer width of the inspected process, in bytes.
///
/// The Unreal Engine titles this extension targets are 64-bit.
pub const POINTER_SIZE: usize = 8;
