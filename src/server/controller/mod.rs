//! HTTP controller endpoints for the SENA web API.
//!
//! Entity endpoints are generic handlers instantiated once per resource through
//! [`entity::ResourceRoutes`]. They only translate between HTTP and the service layer; errors are
//! rendered by [`crate::server::error::Error`]'s `IntoResponse`.

pub mod entity;
pub mod health;
