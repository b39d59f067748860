//! Unreal Engine node types for live process memory inspection
//!
//! Extends a ReClass-style memory inspector with node kinds that interpret
//! raw bytes read from an inspected process as Unreal Engine values
//! (`FDateTime`, `FGuid`, qwords, `FString`, `TArray`, `TSharedPtr`) and
//! persist those interpretations in the host's project file.
//!
//! The host framework (node tree bookkeeping, pixel drawing, process
//! attach) stays on the other side of small traits: [`ProcessMemory`] for
//! the raw read primitive, [`DrawSurface`] for output,
//! [`serialization::CustomNodeSerializer`] for the project-file protocol
//! and [`LogSink`] for diagnostics.

pub mod config;
pub mod core;
pub mod memory;
pub mod nodes;
pub mod render;
pub mod serialization;

// Re-export main types from the core module
pub use crate::core::logging::{CollectingLogger, LogLevel, LogSink, TracingLogger};
pub use crate::core::types::{Address, MemoryError, MemoryResult, POINTER_SIZE};

pub use config::Settings;
pub use memory::{MappedMemory, MemoryBuffer, ProcessMemory};
pub use nodes::{Node, NodeKind, UnrealKind, WrapperNode};
pub use render::{DrawSurface, ViewInfo};
pub use serialization::{Element, NodeConverter};
