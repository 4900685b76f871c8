//! Server application core modules.
//!
//! Requests flow through three layers: controllers translate HTTP into calls on the generic
//! [`service::entity::EntityService`], which validates input and maps DTOs, and the service
//! persists through [`data::repository::EntityRepository`]. Per-entity behavior is described once
//! in [`resource`].

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod resource;
pub mod router;
pub mod service;
pub mod startup;
