use crate::server::resource::{organization::Center, security::Rol};

use super::*;

/// Expect the stored fields to be mapped onto the DTO
#[tokio::test]
async fn returns_existing_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let regional = test.organization().insert_regional("11").await?;
    let center = test.organization().insert_center(regional.id, "9101").await?;

    let service = EntityService::<Center>::new(&test.db);
    let result = service.get_by_id(center.id).await;

    assert!(result.is_ok());
    let dto = result.unwrap();
    assert_eq!(dto.id, center.id);
    assert_eq!(dto.code_center, "9101");
    assert_eq!(dto.regional_id, regional.id);

    Ok(())
}

/// Expect a validation error for non-positive ids, even without any tables
#[tokio::test]
async fn rejects_non_positive_id_before_querying() -> Result<(), TestError> {
    // No tables: any store access would fail with ServiceUnavailable instead
    let test = TestBuilder::new().build().await?;

    let service = EntityService::<Rol>::new(&test.db);

    for id in [0, -1] {
        let result = service.get_by_id(id).await;
        assert!(matches!(result, Err(Error::Validation(ref err)) if err.field == "id"));
    }

    Ok(())
}

/// Expect NotFound naming the entity and id when no row matches
#[tokio::test]
async fn returns_not_found_for_nonexistent_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let service = EntityService::<Rol>::new(&test.db);
    let result = service.get_by_id(999_999).await;

    assert!(matches!(
        result,
        Err(Error::NotFound {
            entity: "Rol",
            id: 999_999
        })
    ));

    Ok(())
}
