use crate::server::resource::security::Rol;

use super::*;

/// Expect an empty list when the table has no rows
#[tokio::test]
async fn returns_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let service = EntityService::<Rol>::new(&test.db);
    let result = service.get_all().await;

    assert!(matches!(result, Ok(ref rols) if rols.is_empty()));

    Ok(())
}

/// Expect inactive rows to be listed alongside active ones
#[tokio::test]
async fn includes_inactive_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let admin = test.security().insert_rol("Administrador").await?;
    test.security().insert_rol("Instructor").await?;

    let service = EntityService::<Rol>::new(&test.db);
    service.soft_delete(admin.id).await.unwrap();
    let rols = service.get_all().await.unwrap();

    assert_eq!(rols.len(), 2);
    assert!(rols.iter().any(|rol| rol.id == admin.id && rol.active == Some(false)));

    Ok(())
}

/// Expect ServiceUnavailable when required tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let service = EntityService::<Rol>::new(&test.db);
    let result = service.get_all().await;

    assert!(matches!(
        result,
        Err(Error::ServiceUnavailable {
            entity: "Rol",
            operation: "list",
            ..
        })
    ));

    Ok(())
}
