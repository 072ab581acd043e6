//! Route definitions for the product catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /          list (filters: category, search, sort, page, limit)
/// POST   /          create
/// GET    /{id}      get_by_id
/// PUT    /{id}      update
/// DELETE /{id}      delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list).post(products::create))
        .route(
            "/{id}",
            get(products::get_by_id)
                .put(products::update)
                .delete(products::delete),
        )
}
