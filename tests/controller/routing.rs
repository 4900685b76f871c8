//! Requests sent through the full router.

use axum::http::{header, StatusCode};
use serde_json::json;

use super::*;

/// Expect 201, a store-assigned id and a Location header for a created rol
#[tokio::test]
async fn post_creates_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = util::send(
        test.app(),
        util::json_request(
            "POST",
            "/api/Rol",
            json!({ "Id": 55, "TypeRol": "Admin", "Description": "x", "Active": true }),
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp.headers()[header::LOCATION].to_str().unwrap().to_string();
    let body = util::body_json(resp).await;
    let id = body["Id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(location, format!("/api/Rol/{}", id));
    assert_eq!(body["TypeRol"], "Admin");

    Ok(())
}

/// Expect every created row to be listed
#[tokio::test]
async fn get_lists_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.security().insert_rol("Administrador").await?;
    test.security().insert_rol("Instructor").await?;

    let resp = util::send(test.app(), util::empty_request("GET", "/api/Rol")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = util::body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    Ok(())
}

/// Expect 400 naming the id for a zero id
#[tokio::test]
async fn get_rejects_zero_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = util::send(test.app(), util::empty_request("GET", "/api/Rol/0")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = util::body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("id"));

    Ok(())
}

/// Expect 400 when the id segment is not a number
#[tokio::test]
async fn get_rejects_non_numeric_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = util::send(test.app(), util::empty_request("GET", "/api/Rol/abc")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 for an id without a row
#[tokio::test]
async fn get_returns_404_for_nonexistent_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = util::send(test.app(), util::empty_request("GET", "/api/Rol/999999")).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a patch carrying only `Active` to leave the other fields untouched
#[tokio::test]
async fn patch_changes_only_sent_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let concept = test.process().insert_concept("Contrato de aprendizaje").await?;
    let uri = format!("/api/Concept/{}", concept.id);

    let resp = util::send(
        test.app(),
        util::json_request("PATCH", &uri, json!({ "Active": false })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = util::send(test.app(), util::empty_request("GET", &uri)).await;
    let body = util::body_json(resp).await;
    assert_eq!(body["Active"], false);
    assert_eq!(body["Name"], "Contrato de aprendizaje");

    Ok(())
}

/// Expect a soft-deleted row to remain retrievable as inactive
#[tokio::test]
async fn soft_delete_keeps_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let rol = test.security().insert_rol("Administrador").await?;

    let resp = util::send(
        test.app(),
        util::empty_request("DELETE", &format!("/api/Rol/soft/{}", rol.id)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = util::body_json(resp).await;
    assert_eq!(body["message"], format!("Rol {} deactivated", rol.id));

    let resp = util::send(
        test.app(),
        util::empty_request("GET", &format!("/api/Rol/{}", rol.id)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = util::body_json(resp).await;
    assert_eq!(body["Active"], false);

    Ok(())
}

/// Expect 400 for a body that is not valid JSON
#[tokio::test]
async fn post_rejects_malformed_json() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/Rol")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{\"TypeRol\": "))
        .unwrap();
    let resp = util::send(test.app(), request).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect change log entries to reject modification
#[tokio::test]
async fn change_log_is_append_only() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let entry = test.process().insert_change_log("Rol", 1).await?;
    let uri = format!("/api/ChangeLog/{}", entry.id);

    let resp = util::send(
        test.app(),
        util::json_request("PUT", &uri, json!({ "TableName": "Rol" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let resp = util::send(test.app(), util::empty_request("DELETE", &uri)).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let resp = util::send(test.app(), util::empty_request("GET", &uri)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect the health endpoint to be mounted under /api
#[tokio::test]
async fn health_is_routed() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = util::send(test.app(), util::empty_request("GET", "/api/health")).await;

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect a PUT without `Active` to leave a soft-deleted row inactive
#[tokio::test]
async fn put_keeps_row_inactive() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let rol = test.security().insert_rol("Administrador").await?;
    let uri = format!("/api/Rol/{}", rol.id);

    let resp = util::send(
        test.app(),
        util::empty_request("DELETE", &format!("/api/Rol/soft/{}", rol.id)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = util::send(
        test.app(),
        util::json_request("PUT", &uri, json!({ "TypeRol": "Admin2", "Description": "d" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = util::send(test.app(), util::empty_request("GET", &uri)).await;
    let body = util::body_json(resp).await;
    assert_eq!(body["TypeRol"], "Admin2");
    assert_eq!(body["Active"], false);

    Ok(())
}

/// Expect a PATCH with an explicit null to clear a nullable field
#[tokio::test]
async fn patch_null_clears_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let person = test.security().insert_person(1).await?;
    let uri = format!("/api/Person/{}", person.id);

    let resp = util::send(
        test.app(),
        util::json_request("PATCH", &uri, json!({ "SecondName": "Maria" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = util::send(
        test.app(),
        util::json_request("PATCH", &uri, json!({ "SecondName": null })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = util::send(test.app(), util::empty_request("GET", &uri)).await;
    let body = util::body_json(resp).await;
    assert!(body["SecondName"].is_null());
    assert_eq!(body["FirstName"], person.first_name);

    Ok(())
}
