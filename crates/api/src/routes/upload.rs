//! Route definition for product image upload.

use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes merged into `/api`.
///
/// ```text
/// POST /upload    upload product image (multipart field `image`)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/upload", post(upload::upload_product_image))
}
