//! Domain Services
//!
//! Stateless helpers used by the surfaces built on top of the store:
//! field validation for the create/edit surface and pagination for the
//! listing surface. The store itself calls neither.

mod pagination;
mod validation;

pub use pagination::*;
pub use validation::*;
