//! Data access layer: a thin typed facade over the relational store.
//!
//! No business logic lives here beyond query shaping. Uniqueness is
//! enforced by the store's unique indexes at insert time; `create_user`
//! only translates that rejection into [`AppError::Conflict`].

use chrono::Utc;
use model::entities::prelude::{Link, User};
use model::entities::{link, user};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use tracing::debug;

use crate::error::AppError;

/// Fields required to insert a user row.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub identity_ref: String,
    pub email: String,
    /// Already lower-cased by the caller.
    pub username: String,
    pub name: Option<String>,
}

pub async fn find_user_by_identity(
    db: &DatabaseConnection,
    identity_ref: &str,
) -> Result<Option<user::Model>, AppError> {
    let found = User::find()
        .filter(user::Column::IdentityRef.eq(identity_ref))
        .one(db)
        .await?;
    Ok(found)
}

/// Public profile lookup. The input must already be lower-cased; with
/// usernames stored lower-cased the match is case-insensitive by
/// construction. Links come back in creation order.
pub async fn find_user_by_username(
    db: &DatabaseConnection,
    username_lower: &str,
) -> Result<Option<(user::Model, Vec<link::Model>)>, AppError> {
    let Some(found) = User::find()
        .filter(user::Column::Username.eq(username_lower))
        .one(db)
        .await?
    else {
        return Ok(None);
    };

    let links = found
        .find_related(Link)
        .order_by_asc(link::Column::Id)
        .all(db)
        .await?;

    Ok(Some((found, links)))
}

pub async fn create_user(db: &DatabaseConnection, new_user: NewUser) -> Result<user::Model, AppError> {
    debug!("Inserting user row for username: {}", new_user.username);

    let row = user::ActiveModel {
        identity_ref: Set(new_user.identity_ref),
        email: Set(new_user.email),
        username: Set(new_user.username),
        name: Set(new_user.name),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    match row.insert(db).await {
        Ok(created) => Ok(created),
        Err(db_error) => match db_error.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::Conflict(
                "username or identity already claimed".to_string(),
            )),
            _ => Err(db_error.into()),
        },
    }
}

pub async fn create_link(
    db: &DatabaseConnection,
    owner_id: i32,
    title: &str,
    url: &str,
) -> Result<link::Model, AppError> {
    debug!("Inserting link '{}' for owner {}", title, owner_id);

    let row = link::ActiveModel {
        title: Set(title.to_string()),
        url: Set(url.to_string()),
        owner_id: Set(owner_id),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let created = row.insert(db).await?;
    Ok(created)
}

/// Fetch a link together with its owner, for the ownership check that
/// precedes deletion.
pub async fn find_link_with_owner(
    db: &DatabaseConnection,
    link_id: i32,
) -> Result<Option<(link::Model, user::Model)>, AppError> {
    let found = Link::find_by_id(link_id)
        .find_also_related(User)
        .one(db)
        .await?;

    // A link without an owner row cannot exist under the foreign key;
    // treat it as absent rather than panic if the store disagrees.
    Ok(found.and_then(|(link_row, owner)| owner.map(|owner| (link_row, owner))))
}

pub async fn delete_link_by_id(db: &DatabaseConnection, link_id: i32) -> Result<(), AppError> {
    let result = Link::delete_by_id(link_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("link not found".to_string()));
    }
    Ok(())
}

/// Dashboard listing for one owner, creation order.
pub async fn list_links_for_user(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Vec<link::Model>, AppError> {
    let links = Link::find()
        .filter(link::Column::OwnerId.eq(user_id))
        .order_by_asc(link::Column::Id)
        .all(db)
        .await?;
    Ok(links)
}

/// Administrative listing, newest first.
pub async fn list_all_users(db: &DatabaseConnection) -> Result<Vec<user::Model>, AppError> {
    let users = User::find()
        .order_by_desc(user::Column::CreatedAt)
        .order_by_desc(user::Column::Id)
        .all(db)
        .await?;
    Ok(users)
}
