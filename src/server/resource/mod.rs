//! Per-entity resource definitions.
//!
//! A resource ties one SeaORM entity to its DTO and patch shapes, along with the validation rules
//! and field mappings the generic [`EntityService`] needs. The traits are layered by capability:
//!
//! - [`Resource`] - list, fetch by id, create and hard delete
//! - [`Updatable`] - full (`PUT`) and partial (`PATCH`) updates
//! - [`SoftDeletable`] - deactivation through the `Active` flag

pub mod audit;
pub mod organization;
pub mod process;
pub mod security;
pub mod training;

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, EntityTrait, FromQueryResult,
    IntoActiveModel, ModelTrait, PrimaryKeyTrait,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::server::error::validation::ValidationError;
#[cfg(doc)]
use crate::server::service::entity::EntityService;

/// Binds an entity table to the DTO exposed for it at `/api/{NAME}`.
pub trait Resource: Send + Sync + 'static {
    /// Entity name used for routes, log fields and error messages, e.g. `Rol`.
    const NAME: &'static str;

    type Entity: EntityTrait<Model = Self::Model, PrimaryKey = Self::PrimaryKey>;
    type Model: FromQueryResult
        + ModelTrait<Entity = Self::Entity>
        + IntoActiveModel<Self::ActiveModel>
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + 'static;
    type PrimaryKey: PrimaryKeyTrait<ValueType = i32>;
    type Dto: Serialize + DeserializeOwned + Send + 'static;

    /// Id carried by the DTO, `0` when the client did not send one.
    fn id(dto: &Self::Dto) -> i32;

    /// Checks the fields required before the DTO may be persisted.
    fn validate(dto: &Self::Dto) -> Result<(), ValidationError>;

    fn to_dto(model: Self::Model) -> Self::Dto;

    /// Maps a validated DTO to a new row; the id is left for the store to assign.
    fn to_active_model(dto: Self::Dto, now: NaiveDateTime) -> Self::ActiveModel;
}

/// A resource whose rows can be replaced or patched after creation.
pub trait Updatable: Resource {
    /// Partial update body: only the fields that are `Some` are applied.
    type Patch: DeserializeOwned + Send + 'static;

    /// Checks only the fields present in the patch.
    fn validate_patch(patch: &Self::Patch) -> Result<(), ValidationError>;

    /// Overwrites every client-editable field of the row with the DTO's values.
    fn apply_dto(dto: Self::Dto, model: &mut Self::ActiveModel);

    fn apply_patch(patch: Self::Patch, model: &mut Self::ActiveModel);

    /// Stamps the row's `update_date`.
    fn touch(model: &mut Self::ActiveModel, now: NaiveDateTime);
}

/// A resource removed by clearing its `Active` flag rather than deleting the row.
pub trait SoftDeletable: Updatable {
    fn deactivate(model: &mut Self::ActiveModel, now: NaiveDateTime);
}

/// Sets `field` when the patch carries a value for it.
pub(crate) fn assign<V>(field: &mut ActiveValue<V>, value: Option<V>)
where
    V: Into<sea_orm::Value>,
{
    if let Some(value) = value {
        *field = ActiveValue::Set(value);
    }
}
