use sena_backend::{
    model::security::RolDto,
    server::{controller::entity::update, resource::security::Rol},
};

use super::*;

/// Expect 200 with a confirmation message
#[tokio::test]
async fn returns_200_for_existing_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let rol = test.security().insert_rol("Administrador").await?;

    let dto = RolDto {
        id: rol.id,
        type_rol: "Coordinador".to_string(),
        description: String::new(),
        active: Some(true),
    };
    let result = update::<Rol>(
        State(test.into_app_state()),
        Ok(Path(rol.id)),
        Ok(Json(dto)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = util::body_json(resp).await;
    assert_eq!(body["message"], format!("Rol {} updated", rol.id));

    Ok(())
}

/// Expect 400 when the body id contradicts the path id
#[tokio::test]
async fn returns_400_for_mismatched_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let rol = test.security().insert_rol("Administrador").await?;

    let dto = RolDto {
        id: rol.id + 10,
        type_rol: "Coordinador".to_string(),
        ..Default::default()
    };
    let result = update::<Rol>(
        State(test.into_app_state()),
        Ok(Path(rol.id)),
        Ok(Json(dto)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 when no row has the path id
#[tokio::test]
async fn returns_404_for_nonexistent_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let dto = RolDto {
        type_rol: "Coordinador".to_string(),
        ..Default::default()
    };
    let result = update::<Rol>(State(test.into_app_state()), Ok(Path(8)), Ok(Json(dto))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
