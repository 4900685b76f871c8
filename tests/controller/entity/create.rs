use axum::http::header;
use sena_backend::{
    model::{organization::RegionalDto, security::RolDto},
    server::{
        controller::entity::create,
        resource::{organization::Regional, security::Rol},
    },
};

use super::*;

/// Expect 201 with the created row and a Location header pointing at it
#[tokio::test]
async fn returns_201_with_location() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let dto = RegionalDto {
        name: "Antioquia".to_string(),
        code_regional: "05".to_string(),
        active: Some(true),
        ..Default::default()
    };
    let result = create::<Regional>(State(test.into_app_state()), Ok(Json(dto))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp.headers()[header::LOCATION].to_str().unwrap().to_string();
    let body = util::body_json(resp).await;
    let id = body["Id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(location, format!("/api/Regional/{}", id));

    Ok(())
}

/// Expect 400 and nothing stored when a required field is blank
#[tokio::test]
async fn returns_400_for_blank_required_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let dto = RolDto {
        type_rol: "  ".to_string(),
        ..Default::default()
    };
    let result = create::<Rol>(State(test.into_app_state()), Ok(Json(dto))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = util::body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("TypeRol"));

    Ok(())
}
