use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A member who has claimed a username.
///
/// `identity_ref` is the opaque subject identifier handed to us by the
/// external identity provider; it is written once at claim time and never
/// changed. `username` is always stored lower-cased, which together with
/// the unique index makes lookups case-insensitive.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub identity_ref: String,
    pub email: String,
    #[sea_orm(unique)]
    pub username: String,
    pub name: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    // A user owns any number of links.
    #[sea_orm(has_many = "super::link::Entity")]
    Link,
}

impl Related<super::link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Link.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Name shown on the public profile card; falls back to the username.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}
