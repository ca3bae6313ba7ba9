//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod employee_id;
mod page_size;
mod sort;

pub use employee_id::*;
pub use page_size::*;
pub use sort::*;
