//! Router assembly.

mod cadastro;
mod common;

pub use cadastro::cadastro_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Full application: CRUD and operational routes, permissive CORS, request tracing, body limit.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(cadastro_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
