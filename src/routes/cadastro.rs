//! Cadastro CRUD routes.

use crate::handlers::cadastro::{create, delete as delete_handler, list, read, root, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn cadastro_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/cadastros", get(list).post(create))
        .route(
            "/cadastros/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
