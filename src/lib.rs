use axum::Router;
use axum::extract::State;
use std::sync::Arc;

pub mod api;
pub mod app_env;
pub mod domain;
pub mod dto;
pub mod logging;
pub mod persistence;
pub mod routing_utils;

/// State shared by every request handler in the application.
pub struct SharedData {
    pub todos: persistence::TodoStore,
}

/// Extractor alias used by handlers to get at [SharedData]
pub type AppState = State<Arc<SharedData>>;

/// Composes the full application router: the todo API at the root plus the
/// swagger UI and OpenAPI schema routes.
pub fn app_router(shared_data: Arc<SharedData>) -> Router {
    Router::new()
        .merge(api::todo::todo_routes())
        .merge(api::swagger_main::build_documentation())
        .with_state(shared_data)
}
