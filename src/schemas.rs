use chrono::{DateTime, Utc};
use model::entities::user;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
}

/// Request body for creating a user through the administrative API.
/// Fields are optional at the serde level so that a missing field maps
/// to a 400 with a useful message rather than a deserialization reject.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    /// Opaque subject identifier from the identity provider
    #[serde(default)]
    pub identity_ref: Option<String>,
    /// Email captured from the identity provider
    #[serde(default)]
    pub email: Option<String>,
    /// Username (stored lower-cased, must be unique)
    #[serde(default)]
    pub username: Option<String>,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
}

/// User record as returned by the administrative API
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub identity_ref: String,
    pub email: String,
    pub username: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            identity_ref: model.identity_ref,
            email: model.email,
            username: model.username,
            name: model.name,
            created_at: model.created_at,
        }
    }
}

/// Error response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::users::list_users,
        crate::handlers::users::create_user,
    ),
    components(
        schemas(
            CreateUserRequest,
            UserResponse,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "Administrative user listing and creation"),
    ),
    info(
        title = "Linkverse API",
        description = "Link-in-bio service - claim a username, publish a page of outbound links",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
