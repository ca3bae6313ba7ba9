//! Infrastructure Adapters
//!
//! Implementations of domain ports.

pub mod memory;

// Re-exports
pub use memory::InMemoryEmployeeRepository;
