//! Handlers for the `/products` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use vitrina_core::catalog::{self, SortKey};
use vitrina_core::error::CoreError;
use vitrina_core::types::DbId;
use vitrina_db::models::product::{CreateProduct, Product, ProductListFilter, UpdateProduct};
use vitrina_db::repositories::ProductRepo;

use crate::error::{validate_payload, AppError, AppResult};
use crate::state::AppState;

/// Query parameters for product listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// GET /api/products
///
/// List active products with filtering, sorting, and pagination. The
/// response carries the page of products plus a pagination envelope.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let filter = ProductListFilter {
        category: query.category,
        search: query.search,
        sort: SortKey::from_query(query.sort.as_deref()),
        page: query.page,
        limit: query.limit,
    };

    let page = catalog::clamp_page(filter.page);
    let limit = catalog::clamp_limit(filter.limit);

    let result = ProductRepo::list(&state.pool, &filter).await?;

    Ok(Json(json!({
        "products": result.products,
        "pagination": {
            "current": page,
            "pages": catalog::total_pages(result.total, limit),
            "total": result.total,
        },
    })))
}

/// GET /api/products/{id}
///
/// Only active products are visible here; an inactive product 404s.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_active_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(product))
}

/// POST /api/products
///
/// Validates every field before touching the store, so a bad payload
/// reports all failing fields at once.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    validate_payload(&payload)?;

    let product = ProductRepo::create(&state.pool, &payload).await?;
    tracing::info!(id = product.id, name = %product.name, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Product created",
            "product": product,
        })),
    ))
}

/// PUT /api/products/{id}
///
/// Partial update: only provided fields are revalidated and applied.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<UpdateProduct>,
) -> AppResult<Json<serde_json::Value>> {
    validate_payload(&payload)?;

    let product = ProductRepo::update(&state.pool, id, &payload)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    Ok(Json(json!({
        "message": "Product updated",
        "product": product,
    })))
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let removed = ProductRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }));
    }

    Ok(Json(json!({ "message": "Product deleted" })))
}
