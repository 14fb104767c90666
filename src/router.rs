use crate::handlers::{
    health::health_check,
    links::{add_link, delete_link},
    pages::{claim, home, profile},
    users::{create_user, list_users},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Page routes
        .route("/", get(home))
        .route("/claim", post(claim))
        .route("/links", post(add_link))
        .route("/links/delete", post(delete_link))
        // Administrative user API
        .route("/api/users", get(list_users))
        .route("/api/users", post(create_user))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public profile catch-all; registered last so fixed routes win
        .route("/:username", get(profile))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
