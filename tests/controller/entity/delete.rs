use sena_backend::server::{
    controller::entity::delete,
    resource::{security::Rol, training::Program},
};

use super::*;

/// Expect 200 and the row removed
#[tokio::test]
async fn returns_200_for_existing_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let program = test.training().insert_program(228_106).await?;

    let result = delete::<Program>(State(test.into_app_state()), Ok(Path(program.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 when no row has the path id
#[tokio::test]
async fn returns_404_for_nonexistent_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = delete::<Rol>(State(test.into_app_state()), Ok(Path(31))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 while the row is referenced by another table
#[tokio::test]
async fn returns_500_while_referenced() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let rol = test.security().insert_rol("Aprendiz").await?;
    let (user, _) = test.security().insert_user_with_person(1).await?;
    test.security().insert_user_rol(user.id, rol.id).await?;

    let result = delete::<Rol>(State(test.into_app_state()), Ok(Path(rol.id))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = util::body_json(resp).await;
    assert_eq!(body["message"], "Failed to delete Rol");

    Ok(())
}
