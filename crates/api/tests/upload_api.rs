//! HTTP-level integration tests for image upload endpoints.

mod common;

use axum::http::StatusCode;
use common::{expect_json, post_multipart};
use sqlx::PgPool;
use vitrina_core::upload::MAX_UPLOAD_BYTES;

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[sqlx::test(migrations = "../db/migrations")]
async fn test_product_upload_returns_image_url(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(app, "/api/upload", "image", "photo.png", "image/png", PNG_BYTES).await;

    let json = expect_json(response, StatusCode::OK).await;
    let url = json["imageUrl"].as_str().unwrap();
    let filename = json["filename"].as_str().unwrap();
    assert!(url.starts_with("/uploads/products/"));
    assert!(filename.starts_with("product-"));
    assert!(filename.ends_with(".png"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_hero_upload_uses_hero_directory(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/hero-slides/upload-image",
        "image",
        "banner.jpg",
        "image/jpeg",
        PNG_BYTES,
    )
    .await;

    let json = expect_json(response, StatusCode::OK).await;
    let url = json["url"].as_str().unwrap();
    assert!(url.starts_with("/uploads/hero/"));
    assert!(json["filename"].as_str().unwrap().starts_with("hero-"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_image_content_type_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/upload",
        "image",
        "evil.html",
        "text/html",
        b"<script>alert(1)</script>",
    )
    .await;

    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "UPLOAD_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_oversized_payload_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let data = vec![0u8; MAX_UPLOAD_BYTES + 1];
    let response =
        post_multipart(app, "/api/upload", "image", "big.png", "image/png", &data).await;

    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "UPLOAD_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_image_field_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/upload",
        "attachment",
        "photo.png",
        "image/png",
        PNG_BYTES,
    )
    .await;

    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "UPLOAD_ERROR");
}
