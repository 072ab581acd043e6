pub mod health;
pub mod hero_slides;
pub mod products;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products                     list, create
/// /products/{id}                get, update, delete
///
/// /hero-slides                  list, create
/// /hero-slides/{id}             get, update, delete
/// /hero-slides/upload-image     upload hero image (multipart)
///
/// /upload                       upload product image (multipart)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Product catalog.
        .nest("/products", products::router())
        // Hero carousel (ordered collection).
        .nest("/hero-slides", hero_slides::router())
        // Product image upload.
        .merge(upload::router())
}
