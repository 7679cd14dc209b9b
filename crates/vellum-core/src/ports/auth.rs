//! Authentication ports.

use uuid::Uuid;

/// Claims carried by a signed session token.
#[derive(Debug, Clone)]
pub struct SessionClaims {
    pub user_id: Uuid,
    pub exp: i64,
}

/// Signs and verifies the payload of the session cookie.
///
/// A token that fails verification - tampered, expired, or signed with a
/// different secret - leaves the request anonymous.
pub trait SessionTokenService: Send + Sync {
    /// Issue a signed token binding a session to a user ID.
    fn issue(&self, user_id: Uuid) -> Result<String, AuthError>;

    /// Validate a token and return its claims.
    fn verify(&self, token: &str) -> Result<SessionClaims, AuthError>;

    /// Lifetime of issued tokens, in seconds.
    fn ttl_seconds(&self) -> i64;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing session")]
    MissingSession,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
