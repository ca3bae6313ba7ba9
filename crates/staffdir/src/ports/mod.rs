//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the surfaces built on top of the
//! domain reach employee data. Implementations live in the server crate.

pub mod repositories;

// Re-exports
pub use repositories::*;
