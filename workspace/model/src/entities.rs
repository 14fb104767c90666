//! This file serves as the root for all SeaORM entity modules.
//! The data model is deliberately small: a `user` who has claimed a
//! username, and the `link` records rendered on that user's public page.

pub mod link;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::link::Entity as Link;
    pub use super::user::Entity as User;
}
