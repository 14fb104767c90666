pub mod health;
pub mod links;
pub mod pages;
pub mod users;
