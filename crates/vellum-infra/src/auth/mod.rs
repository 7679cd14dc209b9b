//! Authentication implementations.

mod password;
mod session;

pub use password::Pbkdf2PasswordService;
pub use session::{SessionConfig, SignedSessionService};
