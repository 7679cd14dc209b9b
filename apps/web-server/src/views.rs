//! Askama view models for every page the server renders.

use actix_web::HttpResponse;
use askama::Template;

use vellum_core::domain::{CommentWithAuthor, PostWithAuthor};
use vellum_shared::avatar;

use crate::flash::{self, Flash};
use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::AppResult;

/// Navigation and flash context shared by every page.
pub struct PageContext {
    pub logged_in: bool,
    pub user_name: String,
    pub messages: Vec<String>,
}

impl PageContext {
    pub fn new(identity: &OptionalIdentity, messages: &Flash) -> Self {
        match &identity.0 {
            Some(identity) => Self::for_user(identity, messages),
            None => Self {
                logged_in: false,
                user_name: String::new(),
                messages: messages.0.clone(),
            },
        }
    }

    pub fn for_user(identity: &Identity, messages: &Flash) -> Self {
        Self {
            logged_in: true,
            user_name: identity.user.name.clone(),
            messages: messages.0.clone(),
        }
    }
}

/// Render a page; a non-empty flash is cleared alongside the body.
pub fn html(page: impl Template, consumed_flash: bool) -> AppResult<HttpResponse> {
    let body = page.render()?;

    let mut builder = HttpResponse::Ok();
    builder.content_type("text/html; charset=utf-8");
    if consumed_flash {
        builder.cookie(flash::clear_cookie());
    }
    Ok(builder.body(body))
}

/// One post row on the listing pages.
pub struct PostCard {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub author_name: String,
    pub author_id: String,
}

impl From<PostWithAuthor> for PostCard {
    fn from(row: PostWithAuthor) -> Self {
        Self {
            id: row.post.id.to_string(),
            title: row.post.title,
            subtitle: row.post.subtitle,
            date: row.post.date,
            author_name: row.author.name,
            author_id: row.author.id.to_string(),
        }
    }
}

/// The full post on the detail page.
pub struct PostDetail {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub body: String,
    pub img_url: String,
    pub author_name: String,
    pub author_id: String,
}

impl From<PostWithAuthor> for PostDetail {
    fn from(row: PostWithAuthor) -> Self {
        Self {
            id: row.post.id.to_string(),
            title: row.post.title,
            subtitle: row.post.subtitle,
            date: row.post.date,
            body: row.post.body,
            img_url: row.post.img_url,
            author_name: row.author.name,
            author_id: row.author.id.to_string(),
        }
    }
}

/// One comment with its author's name and avatar.
pub struct CommentRow {
    pub author_name: String,
    pub avatar_url: String,
    pub text: String,
}

impl From<CommentWithAuthor> for CommentRow {
    fn from(row: CommentWithAuthor) -> Self {
        Self {
            author_name: row.author.name,
            avatar_url: avatar::gravatar_url(&row.author.email, 100),
            text: row.comment.text,
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub ctx: PageContext,
    pub posts: Vec<PostCard>,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostDetailPage {
    pub ctx: PageContext,
    pub post: PostDetail,
    pub comments: Vec<CommentRow>,
}

#[derive(Template)]
#[template(path = "make_post.html")]
pub struct MakePostPage {
    pub ctx: PageContext,
    pub is_edit: bool,
    pub action: String,
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub img_url: String,
}

#[derive(Template)]
#[template(path = "my_blogs.html")]
pub struct AuthorBlogsPage {
    pub ctx: PageContext,
    pub author_name: String,
    pub posts: Vec<PostCard>,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPage {
    pub ctx: PageContext,
    pub author_id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub to: String,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub title: String,
    pub detail: String,
}
