//! Service layer for business rules.
//!
//! [`entity::EntityService`] implements validation, DTO mapping and error classification once for
//! every resource; the field rules it applies live in [`validation`].

pub mod entity;
pub mod validation;

#[cfg(test)]
mod tests;
