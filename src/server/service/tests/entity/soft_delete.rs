use entity::prelude::Rol as RolEntity;
use sea_orm::EntityTrait;

use crate::server::resource::security::Rol;

use super::*;

/// Expect the row to stay retrievable, inactive and with a delete date
#[tokio::test]
async fn deactivates_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let rol = test.security().insert_rol("Administrador").await?;

    let service = EntityService::<Rol>::new(&test.db);
    let result = service.soft_delete(rol.id).await;

    assert!(matches!(result, Ok(true)));
    let stored = RolEntity::find_by_id(rol.id).one(&test.db).await?.unwrap();
    assert!(!stored.active);
    assert!(stored.delete_date.is_some());

    let dto = service.get_by_id(rol.id).await.unwrap();
    assert_eq!(dto.active, Some(false));

    Ok(())
}

/// Expect deactivating twice to succeed both times
#[tokio::test]
async fn is_repeatable() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let rol = test.security().insert_rol("Administrador").await?;

    let service = EntityService::<Rol>::new(&test.db);

    assert!(matches!(service.soft_delete(rol.id).await, Ok(true)));
    assert!(matches!(service.soft_delete(rol.id).await, Ok(true)));
    let stored = RolEntity::find_by_id(rol.id).one(&test.db).await?.unwrap();
    assert!(!stored.active);

    Ok(())
}

/// Expect NotFound when deactivating a row that does not exist
#[tokio::test]
async fn returns_not_found_for_nonexistent_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let service = EntityService::<Rol>::new(&test.db);
    let result = service.soft_delete(5).await;

    assert!(matches!(result, Err(Error::NotFound { .. })));

    Ok(())
}
