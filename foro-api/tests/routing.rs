//! Requests that are answered without touching the database.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{build_app_without_database, expect, get, post_json, put_json};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(build_app_without_database(), "/api/nada").await;

    assert_eq!(
        expect(response, StatusCode::NOT_FOUND).await,
        json!({ "error": "Ruta no encontrada" })
    );
}

#[tokio::test]
async fn unsupported_method_is_an_unknown_route() {
    // Comments can't be created.
    let response = post_json(
        build_app_without_database(),
        "/api/comentarios/1",
        json!({ "comentario": "Hola" }),
    )
    .await;
    assert_eq!(
        expect(response, StatusCode::NOT_FOUND).await,
        json!({ "error": "Ruta no encontrada" })
    );

    let response = put_json(build_app_without_database(), "/api/users", json!({})).await;
    assert_eq!(
        expect(response, StatusCode::NOT_FOUND).await,
        json!({ "error": "Ruta no encontrada" })
    );
}

#[tokio::test]
async fn undecodable_path_parameter_returns_400() {
    let response = get(build_app_without_database(), "/api/users/%FF").await;

    assert_eq!(
        expect(response, StatusCode::BAD_REQUEST).await,
        json!({ "error": "Parámetro de ruta inválido" })
    );
}

#[tokio::test]
async fn malformed_json_returns_400() {
    let request = Request::put("/api/publicaciones/1")
        .header("content-type", "application/json")
        .body(Body::from("{\"titulo\": "))
        .unwrap();
    let response = build_app_without_database().oneshot(request).await.unwrap();

    assert!(expect(response, StatusCode::BAD_REQUEST).await["error"].is_string());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let response = get(build_app_without_database(), "/api/openapi.json").await;
    let doc = expect(response, StatusCode::OK).await;

    let mut paths = doc["paths"].as_object().unwrap().keys().cloned().collect::<Vec<_>>();
    paths.sort();
    assert_eq!(
        paths,
        [
            "/api/admin/users",
            "/api/comentarios/{id}",
            "/api/publicaciones",
            "/api/publicaciones/buscar/{titulo}",
            "/api/publicaciones/categorias/{categoria_id}",
            "/api/publicaciones/{id}",
            "/api/publicaciones/{id}/comentarios",
            "/api/users",
            "/api/users/{id}",
        ]
    );
    assert_eq!(
        doc["components"]["schemas"]["User"]["properties"]["usuarios_id"]["type"],
        "integer"
    );
}
