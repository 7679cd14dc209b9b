use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::User;

/// Comment entity - always tied to one author and one parent post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    pub author_id: Uuid,
    pub post_id: Uuid,
}

impl Comment {
    /// Create a new comment.
    pub fn new(text: String, author_id: Uuid, post_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            author_id,
            post_id,
        }
    }
}

/// A comment joined with its author row, as rendered on the detail page.
#[derive(Debug, Clone)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: User,
}
