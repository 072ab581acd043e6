//! Multipart image upload handlers.
//!
//! Both endpoints accept a single `image` field, enforce the content-type
//! and size caps, and store the file under the configured upload root in
//! a purpose-specific subdirectory. Stored files are served back at
//! `/uploads/{purpose}/{filename}`.

use axum::extract::{Multipart, State};
use axum::Json;
use rand::Rng;
use serde_json::json;
use vitrina_core::upload::{
    exceeds_size_limit, is_image_content_type, stored_filename, ImagePurpose, UPLOAD_FIELD,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/upload
///
/// Upload a product image. Responds with the public URL under `imageUrl`.
pub async fn upload_product_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<serde_json::Value>> {
    let filename = store_image(&state, ImagePurpose::Product, multipart).await?;
    let image_url = public_url(&state, ImagePurpose::Product, &filename);

    Ok(Json(json!({
        "message": "Image uploaded",
        "imageUrl": image_url,
        "filename": filename,
    })))
}

/// POST /api/hero-slides/upload-image
///
/// Upload a hero image. Responds with the public URL under `url`.
pub async fn upload_hero_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<serde_json::Value>> {
    let filename = store_image(&state, ImagePurpose::Hero, multipart).await?;
    let url = public_url(&state, ImagePurpose::Hero, &filename);

    Ok(Json(json!({
        "message": "Image uploaded",
        "url": url,
        "filename": filename,
    })))
}

fn public_url(state: &AppState, purpose: ImagePurpose, filename: &str) -> String {
    format!(
        "{}{}",
        state.config.public_base_url,
        purpose.public_path(filename)
    )
}

/// Pull the `image` field out of the multipart stream, check it, and
/// write it to disk. Returns the generated filename.
async fn store_image(
    state: &AppState,
    purpose: ImagePurpose,
    mut multipart: Multipart,
) -> AppResult<String> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or("").to_string();
        if !is_image_content_type(&content_type) {
            return Err(AppError::UploadNotAnImage(content_type));
        }

        let original_name = field.file_name().unwrap_or("image").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        if exceeds_size_limit(data.len()) {
            return Err(AppError::UploadTooLarge);
        }

        let filename = stored_filename(
            purpose,
            &original_name,
            chrono::Utc::now().timestamp_millis(),
            rand::rng().random_range(0..1_000_000_000),
        );

        let dir = std::path::Path::new(&state.config.upload_dir).join(purpose.dir_name());
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;
        tokio::fs::write(dir.join(&filename), &data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

        tracing::info!(
            %filename,
            bytes = data.len(),
            purpose = purpose.dir_name(),
            "Image stored"
        );
        return Ok(filename);
    }

    Err(AppError::UploadMissingFile)
}
