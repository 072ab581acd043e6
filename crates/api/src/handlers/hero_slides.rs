//! Handlers for the `/hero-slides` resource.
//!
//! Slides form an ordered collection: active slides carry contiguous
//! `order` values starting at 0, and every mutation renumbers siblings
//! inside a single repository transaction.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use vitrina_core::error::CoreError;
use vitrina_core::types::DbId;
use vitrina_db::models::hero_slide::{CreateHeroSlide, HeroSlide, UpdateHeroSlide};
use vitrina_db::repositories::HeroSlideRepo;

use crate::error::{validate_payload, AppError, AppResult};
use crate::state::AppState;

/// Query parameters for slide listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Restrict the listing to active slides. Defaults to true, which is
    /// what the storefront consumes; the admin UI passes `false`.
    #[serde(rename = "activeOnly", default = "default_active_only")]
    pub active_only: bool,
}

fn default_active_only() -> bool {
    true
}

/// GET /api/hero-slides
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<HeroSlide>>> {
    let slides = HeroSlideRepo::list(&state.pool, query.active_only).await?;
    Ok(Json(slides))
}

/// GET /api/hero-slides/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<HeroSlide>> {
    let slide = HeroSlideRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HeroSlide",
            id,
        }))?;
    Ok(Json(slide))
}

/// POST /api/hero-slides
///
/// Inserts at the requested `order` (clamped into the active sequence),
/// shifting later siblings in the same transaction.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateHeroSlide>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    validate_payload(&payload)?;

    let slide = HeroSlideRepo::insert(&state.pool, &payload).await?;
    tracing::info!(id = slide.id, order = slide.sort_order, "Hero slide created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Hero slide created",
            "slide": slide,
        })),
    ))
}

/// PUT /api/hero-slides/{id}
///
/// Field updates and repositioning travel together; a changed `order` or
/// `isActive` renumbers siblings atomically with the field changes.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<UpdateHeroSlide>,
) -> AppResult<Json<serde_json::Value>> {
    validate_payload(&payload)?;

    let slide = HeroSlideRepo::update(&state.pool, id, &payload)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HeroSlide",
            id,
        }))?;

    Ok(Json(json!({
        "message": "Hero slide updated",
        "slide": slide,
    })))
}

/// DELETE /api/hero-slides/{id}
///
/// Removing an active slide closes the gap it leaves in the sequence.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    HeroSlideRepo::remove(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HeroSlide",
            id,
        }))?;

    Ok(Json(json!({ "message": "Hero slide deleted" })))
}
