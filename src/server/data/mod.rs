//! Data access layer.
//!
//! A single generic repository serves every table; entity-specific behavior lives in
//! [`crate::server::resource`].

pub mod repository;
