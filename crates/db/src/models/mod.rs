//! Entity models and DTOs.
//!
//! Each entity module provides a `FromRow + Serialize` row struct plus
//! `Create*` / `Update*` DTOs that derive `validator::Validate`.

pub mod hero_slide;
pub mod product;
