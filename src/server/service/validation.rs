//! Field-level validation rules shared by every resource.
//!
//! Field names are reported the way clients send them (PascalCase).

use crate::server::error::validation::ValidationError;

/// Ids in paths and FK fields must reference an existing row, so they must be positive.
pub fn require_id(id: i32) -> Result<(), ValidationError> {
    require_positive("id", id)
}

pub fn require_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "is required and cannot be empty"));
    }

    Ok(())
}

pub fn require_positive<T>(field: &str, value: T) -> Result<(), ValidationError>
where
    T: Into<i64>,
{
    if value.into() <= 0 {
        return Err(ValidationError::new(field, "must be greater than zero"));
    }

    Ok(())
}

pub fn require_email(field: &str, value: &str) -> Result<(), ValidationError> {
    require_text(field, value)?;

    let valid = match value.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };
    if !valid {
        return Err(ValidationError::new(field, "must be a valid email address"));
    }

    Ok(())
}

/// Patch variant of [`require_text`]: absent fields are accepted.
pub fn require_text_if_present(field: &str, value: Option<&str>) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |value| require_text(field, value))
}

pub fn require_positive_if_present<T>(field: &str, value: Option<T>) -> Result<(), ValidationError>
where
    T: Into<i64>,
{
    value.map_or(Ok(()), |value| require_positive(field, value))
}

pub fn require_email_if_present(field: &str, value: Option<&str>) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |value| require_email(field, value))
}
