use crate::{
    model::{
        organization::CenterDto,
        security::{PersonDto, RolDto, UserDto},
        training::ProgramDto,
    },
    server::resource::{
        organization::Center,
        security::{Person, Rol, User},
        training::Program,
    },
};

use super::*;

/// Expect the created row to come back with a new id and every client field intact
#[tokio::test]
async fn creates_and_reads_back_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let dto = PersonDto {
        id: 0,
        first_name: "Laura".to_string(),
        second_name: Some("Maria".to_string()),
        first_last_name: "Gomez".to_string(),
        second_last_name: None,
        phone_number: "3001234567".to_string(),
        email: "laura.gomez@sena.edu.co".to_string(),
        type_identification: "CC".to_string(),
        number_identification: "1020304050".to_string(),
        signing: None,
        active: Some(true),
    };

    let service = EntityService::<Person>::new(&test.db);
    let created = service.create(dto.clone()).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created, PersonDto { id: created.id, ..dto.clone() });

    let fetched = service.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);

    Ok(())
}

/// Expect the client supplied id to be ignored in favor of a generated one
#[tokio::test]
async fn ignores_client_supplied_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let existing = test.security().insert_rol("Administrador").await?;

    let service = EntityService::<Rol>::new(&test.db);
    let created = service
        .create(RolDto {
            id: existing.id,
            type_rol: "Instructor".to_string(),
            description: String::new(),
            active: Some(true),
        })
        .await
        .unwrap();

    assert_ne!(created.id, existing.id);

    Ok(())
}

/// Expect a validation error and no stored row when a required field is blank
#[tokio::test]
async fn rejects_blank_required_field_without_writing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let service = EntityService::<Rol>::new(&test.db);
    let result = service
        .create(RolDto {
            type_rol: String::new(),
            description: "x".to_string(),
            active: Some(true),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(Error::Validation(ref err)) if err.field == "TypeRol"));
    assert!(service.get_all().await.unwrap().is_empty());

    Ok(())
}

/// Expect a validation error for a non-positive foreign key
#[tokio::test]
async fn rejects_zero_foreign_key() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let service = EntityService::<User>::new(&test.db);
    let result = service
        .create(UserDto {
            username: "lgomez".to_string(),
            email: "lgomez@sena.edu.co".to_string(),
            password: "secret".to_string(),
            person_id: 0,
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(Error::Validation(ref err)) if err.field == "PersonId"));

    Ok(())
}

/// Expect ServiceUnavailable when the referenced parent does not exist
#[tokio::test]
async fn fails_for_nonexistent_parent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let service = EntityService::<Center>::new(&test.db);
    let result = service
        .create(CenterDto {
            name: "Centro Minero".to_string(),
            code_center: "9120".to_string(),
            regional_id: 42,
            active: Some(true),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::ServiceUnavailable {
            operation: "create",
            ..
        })
    ));

    Ok(())
}

/// Expect program codes above the 32-bit range to be stored without loss
#[tokio::test]
async fn stores_wide_program_codes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let service = EntityService::<Program>::new(&test.db);
    let created = service
        .create(ProgramDto {
            code_program: 9_000_000_001,
            name: "Analisis y Desarrollo de Software".to_string(),
            type_program: "Tecnologo".to_string(),
            active: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(created.code_program, 9_000_000_001);

    Ok(())
}
