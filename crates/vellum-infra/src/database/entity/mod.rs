//! SeaORM entities for the blog schema.

pub mod comment;
pub mod post;
pub mod user;
