//! Workflow operations: claim username, add link, delete link.
//!
//! Each is a single-shot request/response with no state persisted
//! between calls. The authenticated identity is passed in explicitly;
//! there is no ambient current-user anywhere in the process.

use model::entities::{link, user};
use sea_orm::DatabaseConnection;
use tracing::{debug, info, instrument, warn};

use crate::error::AppError;
use crate::identity::Identity;
use crate::store::{self, NewUser};

const USERNAME_MIN_LEN: usize = 3;

/// Lower-case and validate a requested username.
///
/// Rules: length >= 3 after no trimming (the raw input is taken as-is),
/// characters restricted to ASCII letters, digits, and underscore.
pub fn normalize_username(raw: &str) -> Result<String, AppError> {
    if raw.len() < USERNAME_MIN_LEN {
        return Err(AppError::Validation(
            "username must be at least 3 characters".to_string(),
        ));
    }
    if !raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(AppError::Validation(
            "username can only contain letters, numbers, and underscores".to_string(),
        ));
    }
    Ok(raw.to_lowercase())
}

fn require_identity(identity: Option<&Identity>) -> Result<&Identity, AppError> {
    identity.ok_or(AppError::Unauthenticated)
}

/// One-time association of a username with the caller's identity.
///
/// The store's unique indexes arbitrate races: of two concurrent claims
/// for the same username exactly one insert succeeds and the other
/// surfaces as a conflict.
#[instrument(skip(db, identity))]
pub async fn claim_username(
    db: &DatabaseConnection,
    identity: Option<&Identity>,
    raw_username: &str,
) -> Result<user::Model, AppError> {
    let identity = require_identity(identity)?;
    let username = normalize_username(raw_username)?;

    debug!("Claiming username '{}' for subject", username);

    let created = store::create_user(
        db,
        NewUser {
            identity_ref: identity.subject.clone(),
            email: identity.email.clone().unwrap_or_default(),
            username,
            name: identity.display_name(),
        },
    )
    .await?;

    info!(
        "Username '{}' claimed, user id {}",
        created.username, created.id
    );
    Ok(created)
}

/// Append a link to the caller's profile.
#[instrument(skip(db, identity))]
pub async fn add_link(
    db: &DatabaseConnection,
    identity: Option<&Identity>,
    title: &str,
    url: &str,
) -> Result<link::Model, AppError> {
    let identity = require_identity(identity)?;

    if title.is_empty() || url.is_empty() {
        return Err(AppError::Validation(
            "title and url are required".to_string(),
        ));
    }

    let owner = store::find_user_by_identity(db, &identity.subject)
        .await?
        .ok_or_else(|| AppError::NotFound("profile not claimed yet".to_string()))?;

    let created = store::create_link(db, owner.id, title, url).await?;
    info!("Link {} added for user {}", created.id, owner.id);
    Ok(created)
}

/// Remove a link after verifying the caller owns it.
#[instrument(skip(db, identity))]
pub async fn delete_link(
    db: &DatabaseConnection,
    identity: Option<&Identity>,
    link_id: i32,
) -> Result<(), AppError> {
    let identity = require_identity(identity)?;

    let (link_row, owner) = store::find_link_with_owner(db, link_id)
        .await?
        .ok_or_else(|| AppError::NotFound("link not found".to_string()))?;

    if owner.identity_ref != identity.subject {
        warn!(
            "Subject attempted to delete link {} owned by user {}",
            link_row.id, owner.id
        );
        return Err(AppError::Forbidden("not your link".to_string()));
    }

    store::delete_link_by_id(db, link_id).await?;
    info!("Link {} deleted by its owner", link_id);
    Ok(())
}
