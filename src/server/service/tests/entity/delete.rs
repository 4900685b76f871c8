use crate::server::resource::{organization::Regional, security::Rol};

use super::*;

/// Expect the row to be gone after deletion
#[tokio::test]
async fn removes_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let rol = test.security().insert_rol("Administrador").await?;

    let service = EntityService::<Rol>::new(&test.db);
    let result = service.delete(rol.id).await;

    assert!(matches!(result, Ok(true)));
    assert!(matches!(
        service.get_by_id(rol.id).await,
        Err(Error::NotFound { .. })
    ));

    Ok(())
}

/// Expect NotFound when deleting a row that does not exist
#[tokio::test]
async fn returns_not_found_for_nonexistent_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let service = EntityService::<Rol>::new(&test.db);
    let result = service.delete(11).await;

    assert!(matches!(result, Err(Error::NotFound { entity: "Rol", id: 11 })));

    Ok(())
}

/// Expect ServiceUnavailable when the row is still referenced by a child
#[tokio::test]
async fn fails_while_referenced() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let regional = test.organization().insert_regional("05").await?;
    test.organization().insert_center(regional.id, "9201").await?;

    let service = EntityService::<Regional>::new(&test.db);
    let result = service.delete(regional.id).await;

    assert!(matches!(
        result,
        Err(Error::ServiceUnavailable {
            operation: "delete",
            ..
        })
    ));

    Ok(())
}
