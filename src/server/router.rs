//! HTTP routing and OpenAPI documentation configuration.
//!
//! Entity routes are registered here, one [`ResourceRoutes`] per table. The health endpoint is
//! registered through utoipa so it appears in the OpenAPI document served with Swagger UI at
//! `/api/docs`, next to the schemas of every DTO.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{api, audit, organization, process, security, training},
    server::{
        controller::{self, entity::ResourceRoutes},
        model::app::AppState,
        resource::{
            audit::ChangeLog,
            organization::{Center, Regional, Sede, UserSede},
            process::{
                AprendizProcessInstructor, Concept, Enterprise, Process, RegisterySofia, State,
                TypeModality, Verification,
            },
            security::{Form, FormModule, Module, Person, Rol, RolForm, User, UserRol},
            training::{Aprendiz, AprendizProgram, Instructor, InstructorProgram, Program},
            SoftDeletable, Updatable,
        },
    },
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// For every entity `{Entity}` (e.g. `Rol`, `AprendizProcessInstructor`):
/// - `GET /api/{Entity}` - List all rows
/// - `GET /api/{Entity}/{id}` - Fetch one row
/// - `POST /api/{Entity}` - Create a row
/// - `PUT /api/{Entity}/{id}` - Replace a row (all but `ChangeLog`)
/// - `PATCH /api/{Entity}/{id}` - Partially update a row (all but `ChangeLog`)
/// - `DELETE /api/{Entity}/soft/{id}` - Deactivate a row (entities with an `Active` flag)
/// - `DELETE /api/{Entity}/{id}` - Delete a row (all but `ChangeLog`)
///
/// Plus `GET /api/health` and the Swagger UI at `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "SENA", description = "SENA training administration API"),
        tags(
            (name = controller::health::HEALTH_TAG, description = "Service health"),
        ),
        components(schemas(
            api::ErrorDto,
            api::MessageDto,
            security::PersonDto,
            security::PersonPatch,
            security::UserDto,
            security::UserPatch,
            security::RolDto,
            security::RolPatch,
            security::UserRolDto,
            security::UserRolPatch,
            security::FormDto,
            security::FormPatch,
            security::RolFormDto,
            security::RolFormPatch,
            security::ModuleDto,
            security::ModulePatch,
            security::FormModuleDto,
            security::FormModulePatch,
            organization::RegionalDto,
            organization::RegionalPatch,
            organization::CenterDto,
            organization::CenterPatch,
            organization::SedeDto,
            organization::SedePatch,
            organization::UserSedeDto,
            organization::UserSedePatch,
            training::ProgramDto,
            training::ProgramPatch,
            training::AprendizDto,
            training::AprendizPatch,
            training::InstructorDto,
            training::InstructorPatch,
            training::AprendizProgramDto,
            training::AprendizProgramPatch,
            training::InstructorProgramDto,
            training::InstructorProgramPatch,
            process::ProcessDto,
            process::ProcessPatch,
            process::TypeModalityDto,
            process::TypeModalityPatch,
            process::RegisterySofiaDto,
            process::RegisterySofiaPatch,
            process::ConceptDto,
            process::ConceptPatch,
            process::EnterpriseDto,
            process::EnterprisePatch,
            process::StateDto,
            process::StatePatch,
            process::VerificationDto,
            process::VerificationPatch,
            process::AprendizProcessInstructorDto,
            process::AprendizProcessInstructorPatch,
            audit::ChangeLogDto,
        ))
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .split_for_parts();

    routes
        .merge(entity_routes())
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

fn entity_routes() -> Router<AppState> {
    Router::new()
        // Security
        .merge(soft_deletable::<Person>())
        .merge(soft_deletable::<User>())
        .merge(soft_deletable::<Rol>())
        .merge(soft_deletable::<UserRol>())
        .merge(soft_deletable::<Form>())
        .merge(pivot::<RolForm>())
        .merge(soft_deletable::<Module>())
        .merge(pivot::<FormModule>())
        // Organization
        .merge(soft_deletable::<Regional>())
        .merge(soft_deletable::<Center>())
        .merge(soft_deletable::<Sede>())
        .merge(pivot::<UserSede>())
        // Training
        .merge(soft_deletable::<Program>())
        .merge(soft_deletable::<Aprendiz>())
        .merge(soft_deletable::<Instructor>())
        .merge(pivot::<AprendizProgram>())
        .merge(pivot::<InstructorProgram>())
        // Process
        .merge(soft_deletable::<Process>())
        .merge(soft_deletable::<TypeModality>())
        .merge(soft_deletable::<RegisterySofia>())
        .merge(soft_deletable::<Concept>())
        .merge(soft_deletable::<Enterprise>())
        .merge(soft_deletable::<State>())
        .merge(soft_deletable::<Verification>())
        .merge(pivot::<AprendizProcessInstructor>())
        // Audit: read and create only
        .merge(ResourceRoutes::<ChangeLog>::new().into_router())
}

fn soft_deletable<R: SoftDeletable>() -> Router<AppState> {
    ResourceRoutes::<R>::new()
        .updatable()
        .soft_deletable()
        .deletable()
        .into_router()
}

fn pivot<R: Updatable>() -> Router<AppState> {
    ResourceRoutes::<R>::new()
        .updatable()
        .deletable()
        .into_router()
}
