//! # Vellum Infrastructure
//!
//! Concrete implementations of the ports defined in `vellum-core`:
//! SeaORM-backed repositories, PBKDF2 password hashing, signed session
//! tokens, and the outbound mail stand-in.

pub mod auth;
pub mod database;
pub mod mailer;

pub use auth::{Pbkdf2PasswordService, SessionConfig, SignedSessionService};
pub use database::{DatabaseConfig, connect};
pub use mailer::LogMailer;
