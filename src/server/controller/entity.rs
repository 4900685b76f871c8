//! Generic CRUD handlers and the builder registering them per resource.

use std::marker::PhantomData;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{self, get, MethodRouter},
    Json, Router,
};

use crate::{
    model::api::MessageDto,
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        resource::{Resource, SoftDeletable, Updatable},
        service::entity::EntityService,
    },
};

/// Registers the endpoints of resource `R` under `/api/{R::NAME}`.
///
/// Every resource gets list, fetch and create; the remaining operations are opted into according
/// to the traits the resource implements:
///
/// ```ignore
/// ResourceRoutes::<Rol>::new()
///     .updatable()
///     .soft_deletable()
///     .deletable()
///     .into_router()
/// ```
pub struct ResourceRoutes<R> {
    item: MethodRouter<AppState>,
    soft_delete: Option<MethodRouter<AppState>>,
    _resource: PhantomData<R>,
}

impl<R: Resource> ResourceRoutes<R> {
    pub fn new() -> Self {
        Self {
            item: get(get_by_id::<R>),
            soft_delete: None,
            _resource: PhantomData,
        }
    }

    /// `DELETE /api/{Entity}/{id}`
    pub fn deletable(mut self) -> Self {
        self.item = self.item.delete(delete::<R>);
        self
    }

    pub fn into_router(self) -> Router<AppState> {
        let collection = format!("/api/{}", R::NAME);
        let item = format!("{}/{{id}}", collection);

        let mut router = Router::new()
            .route(&collection, get(get_all::<R>).post(create::<R>))
            .route(&item, self.item);

        if let Some(soft_delete) = self.soft_delete {
            router = router.route(&format!("{}/soft/{{id}}", collection), soft_delete);
        }

        router
    }
}

impl<R: Resource> Default for ResourceRoutes<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Updatable> ResourceRoutes<R> {
    /// `PUT` and `PATCH /api/{Entity}/{id}`
    pub fn updatable(mut self) -> Self {
        self.item = self.item.put(update::<R>).patch(update_partial::<R>);
        self
    }
}

impl<R: SoftDeletable> ResourceRoutes<R> {
    /// `DELETE /api/{Entity}/soft/{id}`
    pub fn soft_deletable(mut self) -> Self {
        self.soft_delete = Some(routing::delete(soft_delete::<R>));
        self
    }
}

/// `GET /api/{Entity}`
pub async fn get_all<R: Resource>(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let service = EntityService::<R>::new(&state.db);
    let dtos = service.get_all().await?;

    Ok((StatusCode::OK, Json(dtos)))
}

/// `GET /api/{Entity}/{id}`
pub async fn get_by_id<R: Resource>(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;

    let service = EntityService::<R>::new(&state.db);
    let dto = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(dto)))
}

/// `POST /api/{Entity}`
///
/// Responds with 201 and a `Location` header pointing at the new row.
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    body: Result<Json<R::Dto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(dto) = body.map_err(ValidationError::from)?;

    let service = EntityService::<R>::new(&state.db);
    let created = service.create(dto).await?;
    let location = format!("/api/{}/{}", R::NAME, R::id(&created));

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// `PUT /api/{Entity}/{id}`
pub async fn update<R: Updatable>(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<R::Dto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;
    let Json(dto) = body.map_err(ValidationError::from)?;

    let service = EntityService::<R>::new(&state.db);
    service.update(id, dto).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("{} {} updated", R::NAME, id))),
    ))
}

/// `PATCH /api/{Entity}/{id}`
pub async fn update_partial<R: Updatable>(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<R::Patch>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;
    let Json(patch) = body.map_err(ValidationError::from)?;

    let service = EntityService::<R>::new(&state.db);
    service.update_partial(id, patch).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("{} {} updated", R::NAME, id))),
    ))
}

/// `DELETE /api/{Entity}/soft/{id}`
pub async fn soft_delete<R: SoftDeletable>(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;

    let service = EntityService::<R>::new(&state.db);
    service.soft_delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("{} {} deactivated", R::NAME, id))),
    ))
}

/// `DELETE /api/{Entity}/{id}`
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;

    let service = EntityService::<R>::new(&state.db);
    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("{} {} deleted", R::NAME, id))),
    ))
}
