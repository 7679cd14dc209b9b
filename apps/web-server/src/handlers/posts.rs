//! Post listing, detail and comments, authoring, editing, and deletion.

use actix_web::{HttpResponse, web};
use uuid::Uuid;
use validator::Validate;

use vellum_core::domain::{BlogPost, Comment, User};
use vellum_core::ports::{BaseRepository, CommentRepository, PostRepository};
use vellum_shared::forms::{self, CommentForm, PostForm};

use crate::flash::{self, Flash};
use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{self, IndexPage, MakePostPage, PageContext, PostDetailPage};

/// Authorization policy for mutating posts. Today any authenticated user
/// may edit or delete any post; tighten this single check (owner-only,
/// admin-only) when the product decides, without touching the handlers.
fn can_modify_post(_user: &User, _post: &BlogPost) -> bool {
    true
}

fn post_not_found(post_id: Uuid) -> AppError {
    AppError::NotFound(format!("post {post_id} does not exist"))
}

/// GET /
pub async fn index(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    messages: Flash,
) -> AppResult<HttpResponse> {
    let posts = state.posts.list_with_authors().await?;

    let consumed = !messages.0.is_empty();
    views::html(
        IndexPage {
            ctx: PageContext::new(&identity, &messages),
            posts: posts.into_iter().map(Into::into).collect(),
        },
        consumed,
    )
}

/// GET /post/{post_id}
pub async fn show(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    messages: Flash,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    render_detail(&state, identity, messages, path.into_inner()).await
}

/// POST /post/{post_id} - submit a comment.
pub async fn add_comment(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<Uuid>,
    form: web::Form<CommentForm>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    // An anonymous submission never creates a row.
    let Some(identity) = identity.0 else {
        return Ok(flash::redirect(
            "/login",
            "You need to log in or register to comment.",
        ));
    };

    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return Ok(flash::redirect_many(
            &format!("/post/{post_id}"),
            &forms::error_messages(&errors),
        ));
    }

    if state.posts.find_by_id(post_id).await?.is_none() {
        return Err(post_not_found(post_id));
    }

    state
        .comments
        .insert(Comment::new(form.comment_body, identity.user.id, post_id))
        .await?;

    // The insert is committed above, so the render below picks it up.
    render_detail(&state, OptionalIdentity(Some(identity)), Flash::default(), post_id).await
}

async fn render_detail(
    state: &AppState,
    identity: OptionalIdentity,
    messages: Flash,
    post_id: Uuid,
) -> AppResult<HttpResponse> {
    let row = state
        .posts
        .find_with_author(post_id)
        .await?
        .ok_or_else(|| post_not_found(post_id))?;
    let comments = state.comments.find_by_post_with_authors(post_id).await?;

    let consumed = !messages.0.is_empty();
    views::html(
        PostDetailPage {
            ctx: PageContext::new(&identity, &messages),
            post: row.into(),
            comments: comments.into_iter().map(Into::into).collect(),
        },
        consumed,
    )
}

/// GET /new-post
pub async fn new_form(identity: Identity, messages: Flash) -> AppResult<HttpResponse> {
    let consumed = !messages.0.is_empty();
    views::html(
        MakePostPage {
            ctx: PageContext::for_user(&identity, &messages),
            is_edit: false,
            action: "/new-post".to_string(),
            title: String::new(),
            subtitle: String::new(),
            body: String::new(),
            img_url: String::new(),
        },
        consumed,
    )
}

/// POST /new-post
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    if let Err(errors) = form.validate() {
        return Ok(flash::redirect_many(
            "/new-post",
            &forms::error_messages(&errors),
        ));
    }

    let post = BlogPost::new(
        identity.user.id,
        form.title,
        form.subtitle,
        form.body,
        form.img_url,
    );
    state.posts.insert(post).await?;

    Ok(flash::see_other("/"))
}

/// GET /edit-post/{post_id}
pub async fn edit_form(
    state: web::Data<AppState>,
    identity: Identity,
    messages: Flash,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| post_not_found(post_id))?;

    let consumed = !messages.0.is_empty();
    views::html(
        MakePostPage {
            ctx: PageContext::for_user(&identity, &messages),
            is_edit: true,
            action: format!("/edit-post/{post_id}"),
            title: post.title,
            subtitle: post.subtitle,
            body: post.body,
            img_url: post.img_url,
        },
        consumed,
    )
}

/// POST /edit-post/{post_id}
pub async fn edit(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return Ok(flash::redirect_many(
            &format!("/edit-post/{post_id}"),
            &forms::error_messages(&errors),
        ));
    }

    let mut post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| post_not_found(post_id))?;
    if !can_modify_post(&identity.user, &post) {
        return Err(AppError::Forbidden);
    }

    post.title = form.title;
    post.subtitle = form.subtitle;
    post.body = form.body;
    post.img_url = form.img_url;
    // Editing reassigns authorship to the editor; the creation date stays.
    post.author_id = identity.user.id;

    state.posts.update(post).await?;

    Ok(flash::see_other(&format!("/post/{post_id}")))
}

/// GET /delete/{post_id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| post_not_found(post_id))?;
    if !can_modify_post(&identity.user, &post) {
        return Err(AppError::Forbidden);
    }

    // Comments go with the post via the store's cascade rule.
    state.posts.delete(post_id).await?;

    Ok(flash::see_other("/"))
}
