use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, Comment, CommentWithAuthor, PostWithAuthor, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Overwrite an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository. Listing queries resolve the author row alongside each post.
#[async_trait]
pub trait PostRepository: BaseRepository<BlogPost, Uuid> {
    /// All posts in store-default order, each with its author.
    async fn list_with_authors(&self) -> Result<Vec<PostWithAuthor>, RepoError>;

    /// One post with its author.
    async fn find_with_author(&self, id: Uuid) -> Result<Option<PostWithAuthor>, RepoError>;

    /// All posts by one author.
    async fn find_by_author_id(&self, author_id: Uuid) -> Result<Vec<BlogPost>, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    /// All comments on a post, each with its author.
    async fn find_by_post_with_authors(
        &self,
        post_id: Uuid,
    ) -> Result<Vec<CommentWithAuthor>, RepoError>;
}
