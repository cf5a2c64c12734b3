//! HTTP-level tests for the `/api/publicaciones` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, expect, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

fn post_row(
    id: i64,
    titulo: &str,
    contenido: &str,
    usuarios_id: i64,
    categoria_id: i64,
) -> serde_json::Value {
    json!({
        "publicaciones_id": id,
        "titulo": titulo,
        "contenido": contenido,
        "usuarios_id": usuarios_id,
        "categoria_id": categoria_id,
    })
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn list_posts_returns_full_rows(pool: PgPool) {
    let app = common::build_app(pool);
    let body = expect(get(app, "/api/publicaciones").await, StatusCode::OK).await;

    assert_eq!(
        body,
        json!([
            post_row(1, "Mi gato", "Duerme todo el día", 1, 1),
            post_row(2, "Recetas", "Pan casero", 2, 2),
            post_row(3, "Catálogo de gatos", "Siameses y persas", 1, 1),
        ])
    );
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn get_post_returns_base_columns(pool: PgPool) {
    let app = common::build_app(pool);
    let body = expect(get(app, "/api/publicaciones/2").await, StatusCode::OK).await;

    assert_eq!(
        body,
        json!({
            "publicaciones_id": 2,
            "titulo": "Recetas",
            "contenido": "Pan casero",
            "usuarios_id": 2,
        })
    );
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn get_missing_post_returns_404(pool: PgPool) {
    let app = common::build_app(pool);
    let body = expect(get(app, "/api/publicaciones/42").await, StatusCode::NOT_FOUND).await;

    assert_eq!(body, json!({ "error": "Publicación no encontrada" }));
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn create_update_and_read_back(pool: PgPool) {
    let response = post_json(
        common::build_app(pool.clone()),
        "/api/publicaciones",
        json!({ "titulo": "Borrador", "contenido": "Texto", "usuariosId": 2 }),
    )
    .await;
    let created = expect(response, StatusCode::CREATED).await;
    assert_eq!(created["message"], "Publicación creada correctamente");
    let post_id = created["publicacionId"].as_i64().unwrap();

    let response = put_json(
        common::build_app(pool.clone()),
        &format!("/api/publicaciones/{post_id}"),
        json!({ "titulo": "Final", "contenido": "Texto" }),
    )
    .await;
    assert_eq!(
        expect(response, StatusCode::OK).await,
        json!({ "message": "Publicación actualizada correctamente" })
    );

    let response = get(common::build_app(pool), &format!("/api/publicaciones/{post_id}")).await;
    assert_eq!(
        expect(response, StatusCode::OK).await,
        json!({
            "publicaciones_id": post_id,
            "titulo": "Final",
            "contenido": "Texto",
            "usuarios_id": 2,
        })
    );
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn update_without_content_fails_in_storage(pool: PgPool) {
    let app = common::build_app(pool);
    let response = put_json(app, "/api/publicaciones/1", json!({ "titulo": "Solo título" })).await;

    assert_eq!(
        expect(response, StatusCode::INTERNAL_SERVER_ERROR).await,
        json!({ "error": "Error al actualizar la publicación" })
    );
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn delete_post(pool: PgPool) {
    let response = delete(common::build_app(pool.clone()), "/api/publicaciones/3").await;
    assert_eq!(
        expect(response, StatusCode::OK).await,
        json!({ "message": "Publicación eliminada correctamente" })
    );

    let posts = body_json(get(common::build_app(pool), "/api/publicaciones").await).await;
    assert_eq!(posts.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn filter_by_category(pool: PgPool) {
    let app = common::build_app(pool.clone());
    let body = expect(get(app, "/api/publicaciones/categorias/1").await, StatusCode::OK).await;

    assert_eq!(
        body,
        json!([
            post_row(1, "Mi gato", "Duerme todo el día", 1, 1),
            post_row(3, "Catálogo de gatos", "Siameses y persas", 1, 1),
        ])
    );

    let app = common::build_app(pool);
    let body = expect(get(app, "/api/publicaciones/categorias/7").await, StatusCode::OK).await;
    assert_eq!(body, json!([]));
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn search_by_title_substring(pool: PgPool) {
    let ids = |body: serde_json::Value| -> Vec<i64> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|post| post["publicaciones_id"].as_i64().unwrap())
            .collect()
    };

    let response = get(common::build_app(pool.clone()), "/api/publicaciones/buscar/gat").await;
    assert_eq!(ids(expect(response, StatusCode::OK).await), [1, 3]);

    let response = get(common::build_app(pool.clone()), "/api/publicaciones/buscar/Cat").await;
    assert_eq!(ids(expect(response, StatusCode::OK).await), [3]);

    let response = get(
        common::build_app(pool),
        "/api/publicaciones/buscar/Mi%20gato",
    )
    .await;
    assert_eq!(ids(expect(response, StatusCode::OK).await), [1]);
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn search_input_is_never_sql(pool: PgPool) {
    let app = common::build_app(pool.clone());
    let response = get(
        app,
        "/api/publicaciones/buscar/x'%3B%20DROP%20TABLE%20publicaciones%3B%20--",
    )
    .await;
    assert_eq!(expect(response, StatusCode::OK).await, json!([]));

    let posts = body_json(get(common::build_app(pool), "/api/publicaciones").await).await;
    assert_eq!(posts.as_array().unwrap().len(), 3);
}
