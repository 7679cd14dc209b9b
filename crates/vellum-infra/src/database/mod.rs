//! Database connection management and SeaORM repositories.

mod connections;
mod sql_base;

pub mod entity;
pub mod sql_repo;

pub use connections::{DatabaseConfig, connect};
pub use sea_orm::DbConn;
pub use sql_repo::{SqlCommentRepository, SqlPostRepository, SqlUserRepository};

#[cfg(test)]
mod tests;
