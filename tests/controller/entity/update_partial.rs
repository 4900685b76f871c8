use ::entity::prelude::Concept as ConceptEntity;
use sea_orm::EntityTrait;
use sena_backend::{
    model::process::ConceptPatch,
    server::{controller::entity::update_partial, resource::process::Concept},
};

use super::*;

/// Expect only `Active` to change when it is the only field sent
#[tokio::test]
async fn changes_only_active() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let concept = test.process().insert_concept("Contrato de aprendizaje").await?;

    let patch = ConceptPatch {
        active: Some(false),
        ..Default::default()
    };
    let result = update_partial::<Concept>(
        State(test.into_app_state()),
        Ok(Path(concept.id)),
        Ok(Json(patch)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = ConceptEntity::find_by_id(concept.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert!(!stored.active);
    assert_eq!(stored.name, concept.name);
    assert_eq!(stored.observation, concept.observation);

    Ok(())
}

/// Expect 404 when no row has the path id
#[tokio::test]
async fn returns_404_for_nonexistent_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = update_partial::<Concept>(
        State(test.into_app_state()),
        Ok(Path(4)),
        Ok(Json(ConceptPatch::default())),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
