//! Gravatar-style avatar URLs, keyed by the commenter's email address.

use sha2::{Digest, Sha256};

/// Avatar URL for an email address. Purely presentational.
///
/// The email is trimmed and lowercased before hashing so equivalent
/// addresses resolve to the same avatar.
pub fn gravatar_url(email: &str, size: u32) -> String {
    let digest = Sha256::digest(email.trim().to_ascii_lowercase().as_bytes());
    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    format!("https://www.gravatar.com/avatar/{hex}?s={size}&d=retro&r=g")
}
