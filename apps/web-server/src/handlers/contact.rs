//! Contact-the-author form.
//!
//! The handler validates and assembles the message; delivery is the
//! `Mailer` port's business and the shipped implementation only logs.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use vellum_core::ports::{BaseRepository, Mailer, OutgoingMessage};
use vellum_shared::forms::{self, ContactForm};

use crate::flash::{self, Flash};
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{self, ContactPage, PageContext};

#[derive(Debug, Deserialize)]
pub struct ContactQuery {
    pub post_author_id: Option<Uuid>,
    pub post_subtitle: Option<String>,
}

fn recipient_id(query: &ContactQuery) -> AppResult<Uuid> {
    query.post_author_id.ok_or_else(|| {
        AppError::BadRequest("the post_author_id query parameter is required".to_string())
    })
}

/// GET /contact?post_author_id=ID&post_subtitle=S
pub async fn contact_form(
    state: web::Data<AppState>,
    identity: Identity,
    messages: Flash,
    query: web::Query<ContactQuery>,
) -> AppResult<HttpResponse> {
    let recipient_id = recipient_id(&query)?;
    let recipient = state
        .users
        .find_by_id(recipient_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {recipient_id} does not exist")))?;

    let consumed = !messages.0.is_empty();
    views::html(
        ContactPage {
            name: identity.user.name.clone(),
            email: identity.user.email.clone(),
            ctx: PageContext::for_user(&identity, &messages),
            author_id: recipient.id.to_string(),
            subject: query.post_subtitle.clone().unwrap_or_default(),
            to: recipient.email,
        },
        consumed,
    )
}

/// POST /contact?post_author_id=ID
pub async fn send(
    identity: Identity,
    mailer: web::Data<Arc<dyn Mailer>>,
    query: web::Query<ContactQuery>,
    form: web::Form<ContactForm>,
) -> AppResult<HttpResponse> {
    let recipient_id = recipient_id(&query)?;

    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return Ok(flash::redirect_many(
            &format!("/contact?post_author_id={recipient_id}"),
            &forms::error_messages(&errors),
        ));
    }

    let message = OutgoingMessage {
        to: form.to,
        from_name: form.name,
        from_email: form.email,
        subject: form.subject,
        body: form.message,
    };
    mailer
        .send_message(message)
        .await
        .map_err(AppError::internal)?;

    tracing::debug!(user_id = %identity.user.id, "Contact form accepted");

    Ok(flash::redirect(
        "/",
        "Your message has been passed to the author.",
    ))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};

    use crate::test_support::{self, init_test_app};

    #[actix_rt::test]
    async fn contact_requires_a_session() {
        let state = test_support::test_state().await;
        let app = init_test_app!(state);

        let author = test_support::seed_user(&state, "a@x.com", "Ann", "pw123456").await;

        let req = test::TestRequest::get()
            .uri(&format!("/contact?post_author_id={}", author.id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(test_support::location(&resp), "/login");
    }

    #[actix_rt::test]
    async fn missing_recipient_id_is_a_bad_request() {
        let state = test_support::test_state().await;
        let app = init_test_app!(state);

        let sender = test_support::seed_user(&state, "b@x.com", "Bob", "pw123456").await;

        let req = test::TestRequest::get()
            .uri("/contact")
            .cookie(test_support::session_cookie_for(&sender))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn unknown_recipient_is_not_found() {
        let state = test_support::test_state().await;
        let app = init_test_app!(state);

        let sender = test_support::seed_user(&state, "b@x.com", "Bob", "pw123456").await;

        let req = test::TestRequest::get()
            .uri(&format!("/contact?post_author_id={}", uuid::Uuid::new_v4()))
            .cookie(test_support::session_cookie_for(&sender))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn form_is_prefilled_with_sender_subject_and_recipient() {
        let state = test_support::test_state().await;
        let app = init_test_app!(state);

        let author = test_support::seed_user(&state, "a@x.com", "Ann", "pw123456").await;
        let sender = test_support::seed_user(&state, "b@x.com", "Bob", "pw123456").await;

        let req = test::TestRequest::get()
            .uri(&format!(
                "/contact?post_author_id={}&post_subtitle=S1",
                author.id
            ))
            .cookie(test_support::session_cookie_for(&sender))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("value=\"Bob\""));
        assert!(body.contains("value=\"b@x.com\""));
        assert!(body.contains("value=\"a@x.com\""));
        assert!(body.contains("value=\"S1\""));
    }

    #[actix_rt::test]
    async fn valid_submission_is_accepted_without_delivery() {
        let state = test_support::test_state().await;
        let app = init_test_app!(state);

        let author = test_support::seed_user(&state, "a@x.com", "Ann", "pw123456").await;
        let sender = test_support::seed_user(&state, "b@x.com", "Bob", "pw123456").await;

        let req = test::TestRequest::post()
            .uri(&format!("/contact?post_author_id={}", author.id))
            .cookie(test_support::session_cookie_for(&sender))
            .set_form([
                ("name", "Bob"),
                ("email", "b@x.com"),
                ("to", "a@x.com"),
                ("subject", "S1"),
                ("message", "Loved the post."),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(test_support::location(&resp), "/");
        let messages = test_support::flash_messages(&resp);
        assert!(messages.iter().any(|m| m.contains("passed to the author")));
    }

    #[actix_rt::test]
    async fn invalid_submission_redisplays_the_form() {
        let state = test_support::test_state().await;
        let app = init_test_app!(state);

        let author = test_support::seed_user(&state, "a@x.com", "Ann", "pw123456").await;
        let sender = test_support::seed_user(&state, "b@x.com", "Bob", "pw123456").await;

        let req = test::TestRequest::post()
            .uri(&format!("/contact?post_author_id={}", author.id))
            .cookie(test_support::session_cookie_for(&sender))
            .set_form([
                ("name", "Bob"),
                ("email", "b@x.com"),
                ("to", "a@x.com"),
                ("subject", ""),
                ("message", ""),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            test_support::location(&resp),
            format!("/contact?post_author_id={}", author.id)
        );
        let messages = test_support::flash_messages(&resp);
        assert!(messages.iter().any(|m| m.contains("Subject is required")));
    }
}
