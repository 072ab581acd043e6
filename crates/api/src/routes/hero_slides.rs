//! Route definitions for the hero carousel.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{hero_slides, upload};
use crate::state::AppState;

/// Routes mounted at `/hero-slides`.
///
/// ```text
/// GET    /               list (?activeOnly=true|false)
/// POST   /               create (positional insert)
/// POST   /upload-image   upload hero image (multipart)
/// GET    /{id}           get_by_id
/// PUT    /{id}           update (fields and/or reposition)
/// DELETE /{id}           delete (closes the order gap)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(hero_slides::list).post(hero_slides::create))
        .route("/upload-image", post(upload::upload_hero_image))
        .route(
            "/{id}",
            get(hero_slides::get_by_id)
                .put(hero_slides::update)
                .delete(hero_slides::delete),
        )
}
