//! Author profile listing.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use vellum_core::ports::PostRepository;

use crate::flash::Flash;
use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{self, AuthorBlogsPage, PageContext, PostCard};

#[derive(Debug, Deserialize)]
pub struct AuthorQuery {
    pub post_author_id: Option<Uuid>,
}

/// GET /{name}_blogs?post_author_id=ID
///
/// The display name comes from the path and is deliberately not checked
/// against the resolved author id; the query parameter alone selects the
/// posts. See DESIGN.md.
pub async fn author_blogs(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    messages: Flash,
    path: web::Path<String>,
    query: web::Query<AuthorQuery>,
) -> AppResult<HttpResponse> {
    let author_id = query.post_author_id.ok_or_else(|| {
        AppError::BadRequest("the post_author_id query parameter is required".to_string())
    })?;
    let author_name = path.into_inner();

    let posts = state.posts.find_by_author_id(author_id).await?;
    let cards = posts
        .into_iter()
        .map(|post| PostCard {
            id: post.id.to_string(),
            title: post.title,
            subtitle: post.subtitle,
            date: post.date,
            author_name: author_name.clone(),
            author_id: author_id.to_string(),
        })
        .collect();

    let consumed = !messages.0.is_empty();
    views::html(
        AuthorBlogsPage {
            ctx: PageContext::new(&identity, &messages),
            author_name,
            posts: cards,
        },
        consumed,
    )
}
