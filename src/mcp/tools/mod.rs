//! Tool handlers, grouped by entity.
//!
//! Each module declares the argument structs of its tools and the handler
//! bodies that run once configuration has been resolved.

pub mod projects;
pub mod tasks;
