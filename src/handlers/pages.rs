//! Server-rendered page handlers: home (three-state), claim form
//! submission, and the public profile route.

use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::AppError;
use crate::identity::MaybeIdentity;
use crate::schemas::AppState;
use crate::views::{self, HomeView};
use crate::{store, workflows};

#[derive(Debug, Deserialize, Serialize)]
pub struct ClaimForm {
    pub username: String,
}

/// `GET /` - landing, claim, or dashboard depending on who is asking.
#[instrument(skip(state, identity))]
pub async fn home(
    State(state): State<AppState>,
    MaybeIdentity(identity): MaybeIdentity,
) -> Result<Html<String>, AppError> {
    let user = match identity.as_ref() {
        Some(identity) => store::find_user_by_identity(&state.db, &identity.subject).await?,
        None => None,
    };

    let html = match views::select_home_view(identity.as_ref(), user.as_ref()) {
        HomeView::Landing => views::render_landing(),
        HomeView::Claim => views::render_claim(),
        HomeView::Dashboard => {
            // Selection guarantees the user is present here.
            let user = user.ok_or_else(|| AppError::NotFound("profile not found".to_string()))?;
            let links = store::list_links_for_user(&state.db, user.id).await?;
            views::render_dashboard(&user, &links)
        }
    };

    Ok(Html(html))
}

/// `POST /claim` - claim-username form submission.
#[instrument(skip(state, identity))]
pub async fn claim(
    State(state): State<AppState>,
    MaybeIdentity(identity): MaybeIdentity,
    Form(form): Form<ClaimForm>,
) -> Result<Redirect, AppError> {
    workflows::claim_username(&state.db, identity.as_ref(), &form.username).await?;
    Ok(Redirect::to("/"))
}

/// `GET /{username}` - public profile page, case-insensitive.
#[instrument(skip(state))]
pub async fn profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Response, AppError> {
    let username_lower = username.to_lowercase();
    debug!("Public profile lookup for '{}'", username_lower);

    match store::find_user_by_username(&state.db, &username_lower).await? {
        Some((user, links)) => Ok(Html(views::render_profile(&user, &links)).into_response()),
        None => Ok((StatusCode::NOT_FOUND, Html(views::render_not_found())).into_response()),
    }
}
