use entity::prelude::{Concept as ConceptEntity, Person as PersonEntity};
use sea_orm::EntityTrait;

use crate::{
    model::{
        process::ConceptPatch,
        security::{PersonPatch, UserPatch},
    },
    server::resource::{
        process::Concept,
        security::{Person, User},
    },
};

use super::*;

/// Expect only the fields present in the patch to change
#[tokio::test]
async fn changes_only_present_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let concept = test.process().insert_concept("Contrato de aprendizaje").await?;

    let service = EntityService::<Concept>::new(&test.db);
    let result = service
        .update_partial(
            concept.id,
            ConceptPatch {
                active: Some(false),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Ok(true)));
    let stored = ConceptEntity::find_by_id(concept.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert!(!stored.active);
    assert_eq!(stored.name, concept.name);
    assert_eq!(stored.observation, concept.observation);
    assert!(stored.delete_date.is_none());

    Ok(())
}

/// Expect a value equal to the stored one to be accepted
#[tokio::test]
async fn accepts_unchanged_values() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let concept = test.process().insert_concept("Pasantia").await?;

    let service = EntityService::<Concept>::new(&test.db);
    let result = service
        .update_partial(
            concept.id,
            ConceptPatch {
                name: Some(concept.name.clone()),
                active: Some(true),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Ok(true)));

    Ok(())
}

/// Expect a validation error for an invalid present field
#[tokio::test]
async fn rejects_invalid_present_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (user, _) = test.security().insert_user_with_person(1).await?;

    let service = EntityService::<User>::new(&test.db);
    let result = service
        .update_partial(
            user.id,
            UserPatch {
                email: Some("not-an-email".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(Error::Validation(ref err)) if err.field == "Email"));

    Ok(())
}

/// Expect NotFound when patching a row that does not exist
#[tokio::test]
async fn returns_not_found_for_nonexistent_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let service = EntityService::<Concept>::new(&test.db);
    let result = service.update_partial(3, ConceptPatch::default()).await;

    assert!(matches!(result, Err(Error::NotFound { entity: "Concept", id: 3 })));

    Ok(())
}

/// Expect an explicit null to clear a nullable column while absent fields stay untouched
#[tokio::test]
async fn null_clears_nullable_column() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let person = test.security().insert_person(1).await?;

    let service = EntityService::<Person>::new(&test.db);
    let set: PersonPatch =
        serde_json::from_value(serde_json::json!({ "SecondName": "Maria" })).unwrap();
    assert!(matches!(service.update_partial(person.id, set).await, Ok(true)));

    let stored = PersonEntity::find_by_id(person.id).one(&test.db).await?.unwrap();
    assert_eq!(stored.second_name.as_deref(), Some("Maria"));

    let clear: PersonPatch =
        serde_json::from_value(serde_json::json!({ "SecondName": null })).unwrap();
    assert!(matches!(service.update_partial(person.id, clear).await, Ok(true)));

    let stored = PersonEntity::find_by_id(person.id).one(&test.db).await?.unwrap();
    assert_eq!(stored.second_name, None);
    assert_eq!(stored.first_name, person.first_name);

    Ok(())
}
