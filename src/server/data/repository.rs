use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait,
};

/// Repository over any table keyed by a single integer id.
pub struct EntityRepository<'a, E, C: ConnectionTrait> {
    db: &'a C,
    _entity: PhantomData<E>,
}

impl<'a, E, C> EntityRepository<'a, E, C>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    C: ConnectionTrait,
{
    /// Creates a new instance of [`EntityRepository`]
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub async fn get_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.db).await
    }

    /// Inserts a new row, returning it with its assigned id
    pub async fn create<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'a,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(self.db).await
    }

    /// Loads the row, lets `apply` change it and writes the changed columns back.
    ///
    /// Returns `Ok(None)` when no row with the given id exists, including when the row
    /// disappears between the read and the write.
    pub async fn update<A, F>(&self, id: i32, apply: F) -> Result<Option<E::Model>, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'a,
        E::Model: IntoActiveModel<A>,
        F: FnOnce(&mut A) + Send,
    {
        let model = match E::find_by_id(id).one(self.db).await? {
            Some(model) => model,
            None => return Ok(None),
        };

        let mut active_model = model.into_active_model();
        apply(&mut active_model);

        match active_model.update(self.db).await {
            Ok(model) => Ok(Some(model)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Deletes a row
    ///
    /// Returns OK regardless of the row existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        E::delete_by_id(id).exec(self.db).await
    }
}
