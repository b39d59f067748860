//! Core module containing fundamental types shared across the crate
//!
//! Provides the address and error types every other module builds on,
//! plus the logging sink contract shared with the host inspector.

pub mod logging;
pub mod types;

// Re-export commonly used types for convenience
pub use logging::{CollectingLogger, LogLevel, LogSink, TracingLogger};
pub use types::{Address, MemoryError, MemoryResult, POINTER_SIZE};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
