pub mod errors;
pub mod models;
pub mod page;
pub mod routes;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn build_router() -> Router {
    Router::new()
        .route("/", get(routes::index::show_form).post(routes::index::submit_form))
        .layer(TraceLayer::new_for_http())
}
