use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - a registered account.
///
/// `password_hash` is the salted one-way hash produced by the password
/// service; the plaintext password is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a generated ID.
    pub fn new(email: String, password_hash: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            created_at: Utc::now(),
        }
    }
}
