//! Domain logic for the Throttle motorcycle catalog.
//!
//! Pure functions and types only: no database or HTTP dependencies, so the
//! repository layer and the API layer can share the same rules.

pub mod catalog;
pub mod compare;
pub mod error;
pub mod pricing;
pub mod roles;
pub mod trending;
pub mod types;
