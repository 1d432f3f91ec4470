// Library exports for reviews-server
// Integration tests drive the router through these modules

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod intake;
pub mod ranker;
pub mod sentiment;
pub mod state;
pub mod store;

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// The path is never inspected: every request is dispatched on its method.
///
/// Methods other than GET and POST get 405 from the method router.
pub fn build_router(state: AppState) -> Router {
    let reviews: MethodRouter = get(api::reviews::list_reviews)
        .post(api::reviews::create_review)
        .with_state(state);

    Router::new()
        .fallback_service(reviews)
        .layer(TraceLayer::new_for_http())
}
