//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod mailer;
mod repository;

pub use auth::{AuthError, PasswordService, SessionClaims, SessionTokenService};
pub use mailer::{MailError, Mailer, OutgoingMessage};
pub use repository::{BaseRepository, CommentRepository, PostRepository, UserRepository};
