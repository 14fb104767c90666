//! Administrative user API: plain JSON, no page rendering.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use tracing::{debug, info, instrument};

use crate::error::AppError;
use crate::schemas::{AppState, CreateUserRequest, UserResponse};
use crate::store::{self, NewUser};
use crate::workflows;

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "All users, newest first", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = store::list_all_users(&state.db).await?;
    debug!("Retrieved {} users", users.len());

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Create a user directly, bypassing the claim workflow
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Missing or invalid fields", body = crate::schemas::ErrorResponse),
        (status = 409, description = "Username or identity already exists", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let (identity_ref, email, username) = match (
        request.identity_ref.filter(|s| !s.is_empty()),
        request.email.filter(|s| !s.is_empty()),
        request.username.filter(|s| !s.is_empty()),
    ) {
        (Some(identity_ref), Some(email), Some(username)) => (identity_ref, email, username),
        _ => {
            return Err(AppError::Validation(
                "identity_ref, email, and username are required".to_string(),
            ));
        }
    };

    let username = workflows::normalize_username(&username)?;
    let created = store::create_user(
        &state.db,
        NewUser {
            identity_ref,
            email,
            username,
            name: request.name.filter(|s| !s.is_empty()),
        },
    )
    .await?;

    info!("User created via admin API, id {}", created.id);
    Ok((StatusCode::CREATED, Json(UserResponse::from(created))))
}
