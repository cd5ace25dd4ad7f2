pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::resumes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes",
            post(handlers::handle_create_resume).get(handlers::handle_list_resumes),
        )
        .route(
            "/api/v1/resumes/templates",
            get(handlers::handle_list_templates),
        )
        .route(
            "/api/v1/resumes/import-latex",
            post(handlers::handle_import_latex),
        )
        .route(
            "/api/v1/resumes/preview-latex",
            post(handlers::handle_preview_latex),
        )
        .route(
            "/api/v1/resumes/:id",
            get(handlers::handle_get_resume)
                .put(handlers::handle_update_resume)
                .delete(handlers::handle_delete_resume),
        )
        .route(
            "/api/v1/resumes/:id/duplicate",
            post(handlers::handle_duplicate_resume),
        )
        .route(
            "/api/v1/resumes/:id/export-latex",
            get(handlers::handle_export_latex),
        )
        .with_state(state)
}
