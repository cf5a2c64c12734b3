//! The gateway against tables whose keys are `INTEGER`/`SERIAL` rather than `BIGINT`.

mod common;

use axum::http::StatusCode;
use common::{expect, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = false, fixtures("integer_schema", "seed"))]
async fn users_with_integer_keys(pool: PgPool) {
    let body = expect(get(common::build_app(pool.clone()), "/api/users").await, StatusCode::OK).await;
    assert_eq!(body[0]["usuarios_id"], 1);
    assert_eq!(body[1]["usuarios_nombre"], "Luis");

    let response = post_json(
        common::build_app(pool.clone()),
        "/api/users",
        json!({ "usuariosNombre": "B", "email": "b@x" }),
    )
    .await;
    assert_eq!(expect(response, StatusCode::CREATED).await["userId"], 3);

    let response = get(common::build_app(pool), "/api/users/3").await;
    assert_eq!(
        expect(response, StatusCode::OK).await,
        json!({ "usuarios_id": 3, "usuarios_nombre": "B", "email": "b@x" })
    );
}

#[sqlx::test(migrations = false, fixtures("integer_schema", "seed"))]
async fn posts_with_integer_keys(pool: PgPool) {
    let response = post_json(
        common::build_app(pool.clone()),
        "/api/publicaciones",
        json!({ "titulo": "Nueva", "contenido": "Texto", "usuariosId": 1 }),
    )
    .await;
    assert_eq!(expect(response, StatusCode::CREATED).await["publicacionId"], 4);

    let response = get(common::build_app(pool.clone()), "/api/publicaciones/4").await;
    assert_eq!(
        expect(response, StatusCode::OK).await,
        json!({
            "publicaciones_id": 4,
            "titulo": "Nueva",
            "contenido": "Texto",
            "usuarios_id": 1,
        })
    );

    let response = get(common::build_app(pool), "/api/publicaciones/categorias/2").await;
    assert_eq!(expect(response, StatusCode::OK).await[0]["titulo"], "Recetas");
}

#[sqlx::test(migrations = false, fixtures("integer_schema", "seed"))]
async fn comments_with_integer_keys(pool: PgPool) {
    let response = get(common::build_app(pool.clone()), "/api/publicaciones/1/comentarios").await;
    assert_eq!(
        expect(response, StatusCode::OK).await,
        json!([
            { "comentario_id": 1, "comentario": "Qué bonito", "usuario_id": 2 },
            { "comentario_id": 2, "comentario": "Me encanta", "usuario_id": 1 },
        ])
    );

    let response = get(common::build_app(pool), "/api/comentarios/3").await;
    assert_eq!(
        expect(response, StatusCode::OK).await,
        json!({
            "comentario_id": 3,
            "comentario": "Delicioso",
            "usuario_id": 1,
            "publicacion_id": 2,
        })
    );
}
