use entity::prelude::Rol as RolEntity;
use sea_orm::EntityTrait;

use crate::{model::security::RolDto, server::resource::security::Rol};

use super::*;

/// Expect every client field to be replaced and the update date to be stamped
#[tokio::test]
async fn replaces_all_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let rol = test.security().insert_rol("Administrador").await?;

    let service = EntityService::<Rol>::new(&test.db);
    let result = service
        .update(
            rol.id,
            RolDto {
                id: rol.id,
                type_rol: "Coordinador".to_string(),
                description: "Coordinacion academica".to_string(),
                active: Some(true),
            },
        )
        .await;

    assert!(matches!(result, Ok(true)));
    let stored = RolEntity::find_by_id(rol.id).one(&test.db).await?.unwrap();
    assert_eq!(stored.type_rol, "Coordinador");
    assert_eq!(stored.description, "Coordinacion academica");
    assert_eq!(stored.create_date, rol.create_date);
    assert!(stored.update_date.is_some());

    Ok(())
}

/// Expect a body without id to take the path id
#[tokio::test]
async fn accepts_body_without_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let rol = test.security().insert_rol("Administrador").await?;

    let service = EntityService::<Rol>::new(&test.db);
    let result = service
        .update(
            rol.id,
            RolDto {
                type_rol: "Coordinador".to_string(),
                active: Some(true),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Ok(true)));

    Ok(())
}

/// Expect a validation error when the body id differs from the path id
#[tokio::test]
async fn rejects_mismatched_body_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let rol = test.security().insert_rol("Administrador").await?;

    let service = EntityService::<Rol>::new(&test.db);
    let result = service
        .update(
            rol.id,
            RolDto {
                id: rol.id + 1,
                type_rol: "Coordinador".to_string(),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(Error::Validation(ref err)) if err.field == "id"));
    let stored = RolEntity::find_by_id(rol.id).one(&test.db).await?.unwrap();
    assert_eq!(stored.type_rol, "Administrador");

    Ok(())
}

/// Expect NotFound when updating a row that does not exist
#[tokio::test]
async fn returns_not_found_for_nonexistent_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let service = EntityService::<Rol>::new(&test.db);
    let result = service
        .update(
            7,
            RolDto {
                type_rol: "Coordinador".to_string(),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(Error::NotFound { id: 7, .. })));

    Ok(())
}

/// Expect a replacement without `Active` to leave a deactivated row inactive
#[tokio::test]
async fn keeps_active_flag_when_omitted() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let rol = test.security().insert_rol("Administrador").await?;

    let service = EntityService::<Rol>::new(&test.db);
    assert!(matches!(service.soft_delete(rol.id).await, Ok(true)));

    let result = service
        .update(
            rol.id,
            RolDto {
                type_rol: "Admin2".to_string(),
                description: "d".to_string(),
                active: None,
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Ok(true)));
    let stored = RolEntity::find_by_id(rol.id).one(&test.db).await?.unwrap();
    assert_eq!(stored.type_rol, "Admin2");
    assert!(!stored.active);

    Ok(())
}
