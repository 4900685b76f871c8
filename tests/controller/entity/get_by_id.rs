use sena_backend::server::{controller::entity::get_by_id, resource::security::Rol};

use super::*;

/// Expect 200 with the stored row
#[tokio::test]
async fn returns_200_for_existing_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let rol = test.security().insert_rol("Administrador").await?;

    let result = get_by_id::<Rol>(State(test.into_app_state()), Ok(Path(rol.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = util::body_json(resp).await;
    assert_eq!(body["Id"], rol.id);
    assert_eq!(body["TypeRol"], "Administrador");

    Ok(())
}

/// Expect 400 for a zero id
#[tokio::test]
async fn returns_400_for_zero_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = get_by_id::<Rol>(State(test.into_app_state()), Ok(Path(0))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 for an id without a row
#[tokio::test]
async fn returns_404_for_nonexistent_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = get_by_id::<Rol>(State(test.into_app_state()), Ok(Path(999_999))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 when required tables are not present
#[tokio::test]
async fn returns_500_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_by_id::<Rol>(State(test.into_app_state()), Ok(Path(1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = util::body_json(resp).await;
    assert_eq!(body["message"], "Failed to retrieve Rol");

    Ok(())
}
