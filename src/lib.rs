//! SENA training-administration backend.
//!
//! The [`model`] module holds the wire shapes shared by every endpoint, while [`server`]
//! contains the HTTP surface, the business layer and the data access layer built on SeaORM.

pub mod model;
pub mod server;
