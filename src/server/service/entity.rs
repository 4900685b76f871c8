use std::marker::PhantomData;

use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::repository::EntityRepository,
    error::{validation::ValidationError, Error},
    resource::{Resource, SoftDeletable, Updatable},
    service::validation::require_id,
};

/// Service implementing the CRUD contract shared by every resource.
///
/// Validates input before touching the store, maps rows to DTOs and translates store outcomes
/// into [`Error`] variants. Failures are logged here, where the entity and id are known.
///
/// Mutating operations return `Ok(true)` on success; a missing row is always reported as
/// [`Error::NotFound`] rather than `false`.
pub struct EntityService<'a, R> {
    db: &'a DatabaseConnection,
    _resource: PhantomData<R>,
}

impl<'a, R: Resource> EntityService<'a, R> {
    /// Creates a new instance of EntityService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _resource: PhantomData,
        }
    }

    fn repository(&self) -> EntityRepository<'a, R::Entity, DatabaseConnection> {
        EntityRepository::new(self.db)
    }

    /// Retrieves every row of the resource, active or not.
    ///
    /// # Returns
    /// - `Ok(Vec<Dto>)` - All rows, possibly empty
    /// - `Err(Error::ServiceUnavailable)` - The store failed
    pub async fn get_all(&self) -> Result<Vec<R::Dto>, Error> {
        let models = self
            .repository()
            .get_all()
            .await
            .map_err(|err| store_failure::<R>("list", None, err))?;

        Ok(models.into_iter().map(R::to_dto).collect())
    }

    /// Retrieves a single row by id.
    ///
    /// # Returns
    /// - `Ok(Dto)` - Row found
    /// - `Err(Error::Validation)` - `id` is not positive
    /// - `Err(Error::NotFound)` - No row has this id
    /// - `Err(Error::ServiceUnavailable)` - The store failed
    pub async fn get_by_id(&self, id: i32) -> Result<R::Dto, Error> {
        check_id::<R>(id)?;

        match self.repository().get_by_id(id).await {
            Ok(Some(model)) => Ok(R::to_dto(model)),
            Ok(None) => Err(not_found::<R>(id)),
            Err(err) => Err(store_failure::<R>("retrieve", Some(id), err)),
        }
    }

    /// Validates and inserts a new row.
    ///
    /// Any id carried by the DTO is ignored; the store assigns one.
    ///
    /// # Returns
    /// - `Ok(Dto)` - The created row, including its new id
    /// - `Err(Error::Validation)` - A required field is missing or invalid; nothing was written
    /// - `Err(Error::ServiceUnavailable)` - The store failed, e.g. on a foreign key violation
    pub async fn create(&self, dto: R::Dto) -> Result<R::Dto, Error> {
        R::validate(&dto).map_err(rejected::<R>)?;

        let model = R::to_active_model(dto, Utc::now().naive_utc());
        let created = self
            .repository()
            .create(model)
            .await
            .map_err(|err| store_failure::<R>("create", None, err))?;

        let dto = R::to_dto(created);
        tracing::info!(entity = R::NAME, id = R::id(&dto), "Created");

        Ok(dto)
    }

    /// Permanently removes a row.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Err(Error::Validation)` - `id` is not positive
    /// - `Err(Error::NotFound)` - No row has this id
    /// - `Err(Error::ServiceUnavailable)` - The store failed, e.g. the row is still referenced
    pub async fn delete(&self, id: i32) -> Result<bool, Error> {
        check_id::<R>(id)?;

        let result = self
            .repository()
            .delete(id)
            .await
            .map_err(|err| store_failure::<R>("delete", Some(id), err))?;

        if result.rows_affected == 0 {
            return Err(not_found::<R>(id));
        }

        tracing::info!(entity = R::NAME, id = id, "Deleted");

        Ok(true)
    }
}

impl<'a, R: Updatable> EntityService<'a, R> {
    /// Replaces every client-editable field of an existing row.
    ///
    /// The path id is authoritative: a body id of `0` is accepted, any other value must match.
    ///
    /// # Returns
    /// - `Ok(true)` - Row updated
    /// - `Err(Error::Validation)` - Invalid id, mismatching body id or invalid fields
    /// - `Err(Error::NotFound)` - No row has this id
    /// - `Err(Error::ServiceUnavailable)` - The store failed
    pub async fn update(&self, id: i32, dto: R::Dto) -> Result<bool, Error> {
        check_id::<R>(id)?;

        let body_id = R::id(&dto);
        if body_id != 0 && body_id != id {
            return Err(rejected::<R>(ValidationError::new(
                "id",
                format!("body id {} does not match path id {}", body_id, id),
            )));
        }
        R::validate(&dto).map_err(rejected::<R>)?;

        let now = Utc::now().naive_utc();
        self.repository()
            .update(id, move |model: &mut R::ActiveModel| {
                R::apply_dto(dto, model);
                R::touch(model, now);
            })
            .await
            .map_err(|err| store_failure::<R>("update", Some(id), err))?
            .ok_or_else(|| not_found::<R>(id))?;

        tracing::info!(entity = R::NAME, id = id, "Updated");

        Ok(true)
    }

    /// Applies only the fields present in `patch`.
    ///
    /// An empty patch is valid and only refreshes the row's update date.
    pub async fn update_partial(&self, id: i32, patch: R::Patch) -> Result<bool, Error> {
        check_id::<R>(id)?;
        R::validate_patch(&patch).map_err(rejected::<R>)?;

        let now = Utc::now().naive_utc();
        self.repository()
            .update(id, move |model: &mut R::ActiveModel| {
                R::apply_patch(patch, model);
                R::touch(model, now);
            })
            .await
            .map_err(|err| store_failure::<R>("update", Some(id), err))?
            .ok_or_else(|| not_found::<R>(id))?;

        tracing::info!(entity = R::NAME, id = id, "Patched");

        Ok(true)
    }
}

impl<'a, R: SoftDeletable> EntityService<'a, R> {
    /// Marks a row inactive and stamps its delete date, keeping it retrievable.
    ///
    /// Deactivating an already inactive row succeeds and refreshes the delete date.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deactivated
    /// - `Err(Error::Validation)` - `id` is not positive
    /// - `Err(Error::NotFound)` - No row has this id
    /// - `Err(Error::ServiceUnavailable)` - The store failed
    pub async fn soft_delete(&self, id: i32) -> Result<bool, Error> {
        check_id::<R>(id)?;

        let now = Utc::now().naive_utc();
        self.repository()
            .update(id, move |model: &mut R::ActiveModel| {
                R::deactivate(model, now);
                R::touch(model, now);
            })
            .await
            .map_err(|err| store_failure::<R>("deactivate", Some(id), err))?
            .ok_or_else(|| not_found::<R>(id))?;

        tracing::info!(entity = R::NAME, id = id, "Deactivated");

        Ok(true)
    }
}

fn check_id<R: Resource>(id: i32) -> Result<(), Error> {
    require_id(id).map_err(rejected::<R>)
}

fn rejected<R: Resource>(err: ValidationError) -> Error {
    tracing::warn!(entity = R::NAME, field = %err.field, "{}", err.message);

    Error::Validation(err)
}

fn not_found<R: Resource>(id: i32) -> Error {
    tracing::warn!(entity = R::NAME, id = id, "Not found");

    Error::not_found(R::NAME, id)
}

fn store_failure<R: Resource>(operation: &'static str, id: Option<i32>, err: DbErr) -> Error {
    tracing::error!(
        entity = R::NAME,
        operation = operation,
        id = ?id,
        error = %err,
        "Store operation failed"
    );

    Error::service_unavailable(R::NAME, operation, err)
}
