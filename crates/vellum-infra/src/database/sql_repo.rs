//! SeaORM repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use vellum_core::domain::{BlogPost, CommentWithAuthor, PostWithAuthor, User};
use vellum_core::error::RepoError;
use vellum_core::ports::{CommentRepository, PostRepository, UserRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::sql_base::SqlBaseRepository;

/// User repository over the relational store.
pub type SqlUserRepository = SqlBaseRepository<UserEntity>;

/// Post repository over the relational store.
pub type SqlPostRepository = SqlBaseRepository<PostEntity>;

/// Comment repository over the relational store.
pub type SqlCommentRepository = SqlBaseRepository<CommentEntity>;

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = if let Some(at_pos) = email.find('@') {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = if local.len() > 1 {
                format!("{}***", &local[..1])
            } else {
                "***".to_string()
            };
            format!("{}{}", masked_local, domain)
        } else {
            "***".to_string()
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

// The author foreign keys are NOT NULL, so a row without its author means
// the store itself is inconsistent.
fn missing_author(entity: &'static str) -> RepoError {
    RepoError::Query(format!("{entity} row has no author"))
}

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn list_with_authors(&self) -> Result<Vec<PostWithAuthor>, RepoError> {
        let rows = PostEntity::find()
            .find_also_related(UserEntity)
            .all(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        rows.into_iter()
            .map(|(post, author)| {
                let author = author.ok_or_else(|| missing_author("post"))?;
                Ok(PostWithAuthor {
                    post: post.into(),
                    author: author.into(),
                })
            })
            .collect()
    }

    async fn find_with_author(&self, id: Uuid) -> Result<Option<PostWithAuthor>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        match row {
            Some((post, author)) => {
                let author = author.ok_or_else(|| missing_author("post"))?;
                Ok(Some(PostWithAuthor {
                    post: post.into(),
                    author: author.into(),
                }))
            }
            None => Ok(None),
        }
    }

    async fn find_by_author_id(&self, author_id: Uuid) -> Result<Vec<BlogPost>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::AuthorId.eq(author_id))
            .all(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CommentRepository for SqlCommentRepository {
    async fn find_by_post_with_authors(
        &self,
        post_id: Uuid,
    ) -> Result<Vec<CommentWithAuthor>, RepoError> {
        let rows = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .find_also_related(UserEntity)
            .all(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        rows.into_iter()
            .map(|(comment, author)| {
                let author = author.ok_or_else(|| missing_author("comment"))?;
                Ok(CommentWithAuthor {
                    comment: comment.into(),
                    author: author.into(),
                })
            })
            .collect()
    }
}
