//! Hero slide entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vitrina_core::types::{DbId, Timestamp};
use vitrina_core::validation::validate_image_ref;

/// A row from the `hero_slides` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroSlide {
    pub id: DbId,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
    #[serde(rename = "updatedAt")]
    pub updated_at: Timestamp,
}

/// DTO for inserting a new slide.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHeroSlide {
    #[validate(length(min = 1, max = 100, message = "title is required (at most 100 characters)"))]
    pub title: String,
    #[validate(length(
        min = 1,
        max = 200,
        message = "subtitle is required (at most 200 characters)"
    ))]
    pub subtitle: String,
    #[validate(custom(function = validate_image_ref))]
    pub image: String,
    /// Desired position; clamped into the active sequence. Defaults to 0.
    #[serde(rename = "order", default)]
    pub sort_order: Option<i32>,
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}

/// DTO for updating/repositioning a slide. All fields optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateHeroSlide {
    #[validate(length(min = 1, max = 100, message = "title must not be empty (at most 100 characters)"))]
    pub title: Option<String>,
    #[validate(length(
        min = 1,
        max = 200,
        message = "subtitle must not be empty (at most 200 characters)"
    ))]
    pub subtitle: Option<String>,
    #[validate(custom(function = validate_image_ref))]
    pub image: Option<String>,
    #[serde(rename = "order", default)]
    #[validate(range(min = 0, message = "order must not be negative"))]
    pub sort_order: Option<i32>,
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}
