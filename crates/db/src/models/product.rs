//! Product entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vitrina_core::types::{DbId, Timestamp};
use vitrina_core::validation::{validate_category, validate_image_ref};

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub price: i64,
    #[serde(rename = "oldPrice")]
    pub old_price: Option<i64>,
    pub image: String,
    pub badge: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
    #[serde(rename = "updatedAt")]
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(custom(function = validate_category))]
    pub category: String,
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i64,
    #[serde(rename = "oldPrice", default)]
    #[validate(range(min = 0, message = "old price must not be negative"))]
    pub old_price: Option<i64>,
    #[validate(custom(function = validate_image_ref))]
    pub image: String,
    #[validate(length(max = 20, message = "badge must be at most 20 characters"))]
    pub badge: Option<String>,
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}

/// DTO for updating a product. All fields optional; only provided fields
/// are revalidated and applied.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProduct {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(custom(function = validate_category))]
    pub category: Option<String>,
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: Option<i64>,
    #[serde(rename = "oldPrice", default)]
    #[validate(range(min = 0, message = "old price must not be negative"))]
    pub old_price: Option<i64>,
    #[validate(custom(function = validate_image_ref))]
    pub image: Option<String>,
    #[validate(length(max = 20, message = "badge must be at most 20 characters"))]
    pub badge: Option<String>,
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}

/// Filter and pagination parameters for product listing.
#[derive(Debug, Clone, Default)]
pub struct ProductListFilter {
    /// Exact category, or `None` / `"all"` for every category.
    pub category: Option<String>,
    /// Case-insensitive substring match on `name`.
    pub search: Option<String>,
    pub sort: vitrina_core::catalog::SortKey,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
