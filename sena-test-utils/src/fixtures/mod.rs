//! Row fixtures grouped by schema area.
//!
//! - `security` - people, users, roles, forms and modules
//! - `organization` - regionals, centers and sedes
//! - `training` - programs, aprendices and instructors
//! - `process` - process catalogs and change log entries

pub mod organization;
pub mod process;
pub mod security;
pub mod training;
