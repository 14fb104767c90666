//! Link mutation handlers, both invoked as dashboard form submissions.

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::AppError;
use crate::identity::MaybeIdentity;
use crate::schemas::AppState;
use crate::workflows;

#[derive(Debug, Deserialize, Serialize)]
pub struct AddLinkForm {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteLinkForm {
    pub link_id: String,
}

/// `POST /links` - add a link to the caller's profile.
#[instrument(skip(state, identity))]
pub async fn add_link(
    State(state): State<AppState>,
    MaybeIdentity(identity): MaybeIdentity,
    Form(form): Form<AddLinkForm>,
) -> Result<Redirect, AppError> {
    workflows::add_link(&state.db, identity.as_ref(), &form.title, &form.url).await?;
    Ok(Redirect::to("/"))
}

/// `POST /links/delete` - delete one of the caller's own links.
#[instrument(skip(state, identity))]
pub async fn delete_link(
    State(state): State<AppState>,
    MaybeIdentity(identity): MaybeIdentity,
    Form(form): Form<DeleteLinkForm>,
) -> Result<Redirect, AppError> {
    let link_id: i32 = form
        .link_id
        .parse()
        .map_err(|_| AppError::Validation("link_id must be an integer".to_string()))?;

    workflows::delete_link(&state.db, identity.as_ref(), link_id).await?;
    Ok(Redirect::to("/"))
}
