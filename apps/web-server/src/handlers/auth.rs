//! Registration, login, and logout handlers.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use vellum_core::domain::User;
use vellum_core::ports::{BaseRepository, PasswordService, SessionTokenService, UserRepository};
use vellum_shared::forms::{self, LoginForm, RegisterForm};

use crate::flash::{self, Flash};
use crate::middleware::auth::{self, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{self, LoginPage, PageContext, RegisterPage};

/// The same message for an unknown email and a wrong password, so a failed
/// login does not reveal whether the account exists.
const INVALID_CREDENTIALS: &str = "Invalid Credentials! Please try again.";

/// GET /register
pub async fn register_form(identity: OptionalIdentity, messages: Flash) -> AppResult<HttpResponse> {
    let consumed = !messages.0.is_empty();
    views::html(
        RegisterPage {
            ctx: PageContext::new(&identity, &messages),
        },
        consumed,
    )
}

/// POST /register
pub async fn register(
    state: web::Data<AppState>,
    passwords: web::Data<Arc<dyn PasswordService>>,
    sessions: web::Data<Arc<dyn SessionTokenService>>,
    form: web::Form<RegisterForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    if let Err(errors) = form.validate() {
        return Ok(flash::redirect_many("/register", &forms::error_messages(&errors)));
    }

    // Duplicate email is a validation outcome, not a server error.
    if state.users.find_by_email(&form.email).await?.is_some() {
        return Ok(flash::redirect(
            "/register",
            "Email already taken, please try again.",
        ));
    }

    let password_hash = passwords.hash(&form.password).map_err(AppError::internal)?;
    let user = state
        .users
        .insert(User::new(form.email, password_hash, form.name))
        .await?;

    start_session(&sessions, &user)
}

/// GET /login
pub async fn login_form(identity: OptionalIdentity, messages: Flash) -> AppResult<HttpResponse> {
    let consumed = !messages.0.is_empty();
    views::html(
        LoginPage {
            ctx: PageContext::new(&identity, &messages),
        },
        consumed,
    )
}

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    passwords: web::Data<Arc<dyn PasswordService>>,
    sessions: web::Data<Arc<dyn SessionTokenService>>,
    form: web::Form<LoginForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    if let Err(errors) = form.validate() {
        return Ok(flash::redirect_many("/login", &forms::error_messages(&errors)));
    }

    let user = match state.users.find_by_email(&form.email).await? {
        Some(user) => user,
        None => return Ok(flash::redirect("/login", INVALID_CREDENTIALS)),
    };

    let valid = passwords
        .verify(&form.password, &user.password_hash)
        .map_err(AppError::internal)?;
    if !valid {
        return Ok(flash::redirect("/login", INVALID_CREDENTIALS));
    }

    start_session(&sessions, &user)
}

/// GET /logout
pub async fn logout() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(auth::clear_session_cookie())
        .finish()
}

/// Bind the session to the user and land on the listing.
fn start_session(
    sessions: &Arc<dyn SessionTokenService>,
    user: &User,
) -> AppResult<HttpResponse> {
    let token = sessions.issue(user.id).map_err(AppError::internal)?;

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(auth::session_cookie(token, sessions.ttl_seconds()))
        .finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};

    use vellum_core::ports::UserRepository;

    use crate::test_support::{self, init_test_app};

    #[actix_rt::test]
    async fn register_starts_a_session_and_redirects_to_listing() {
        let state = test_support::test_state().await;
        let app = init_test_app!(state);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form([
                ("name", "Ann"),
                ("email", "a@x.com"),
                ("password", "pw123456"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(test_support::location(&resp), "/");
        let session = test_support::response_cookie(&resp, "session").expect("session cookie");
        assert!(!session.value().is_empty());

        // The stored password is a salted hash, never the plaintext.
        let user = state.users.find_by_email("a@x.com").await.unwrap().unwrap();
        assert!(user.password_hash.starts_with("$pbkdf2-sha256$"));
        assert!(!user.password_hash.contains("pw123456"));
    }

    #[actix_rt::test]
    async fn duplicate_email_is_rejected_without_creating_a_second_row() {
        let state = test_support::test_state().await;
        let app = init_test_app!(state);

        test_support::seed_user(&state, "a@x.com", "Ann", "pw123456").await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form([
                ("name", "Impostor"),
                ("email", "a@x.com"),
                ("password", "pw999999"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(test_support::location(&resp), "/register");
        let messages = test_support::flash_messages(&resp);
        assert!(messages.iter().any(|m| m.contains("Email already taken")));

        // The original row is untouched and no session was started.
        let user = state.users.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(user.name, "Ann");
        assert!(test_support::response_cookie(&resp, "session").is_none());
    }

    #[actix_rt::test]
    async fn login_with_correct_password_succeeds() {
        let state = test_support::test_state().await;
        let app = init_test_app!(state);

        test_support::seed_user(&state, "a@x.com", "Ann", "pw123456").await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "a@x.com"), ("password", "pw123456")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(test_support::location(&resp), "/");
        assert!(test_support::response_cookie(&resp, "session").is_some());
    }

    #[actix_rt::test]
    async fn login_failure_is_identical_for_unknown_email_and_wrong_password() {
        let state = test_support::test_state().await;
        let app = init_test_app!(state);

        test_support::seed_user(&state, "a@x.com", "Ann", "pw123456").await;

        let unknown_email = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "nobody@x.com"), ("password", "pw123456")])
            .to_request();
        let resp_unknown = test::call_service(&app, unknown_email).await;

        let wrong_password = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "a@x.com"), ("password", "wrong-password")])
            .to_request();
        let resp_wrong = test::call_service(&app, wrong_password).await;

        assert_eq!(resp_unknown.status(), resp_wrong.status());
        assert_eq!(
            test_support::location(&resp_unknown),
            test_support::location(&resp_wrong)
        );
        assert_eq!(
            test_support::flash_messages(&resp_unknown),
            test_support::flash_messages(&resp_wrong)
        );
        assert!(test_support::response_cookie(&resp_unknown, "session").is_none());
        assert!(test_support::response_cookie(&resp_wrong, "session").is_none());
    }

    #[actix_rt::test]
    async fn logout_clears_the_session_cookie() {
        let state = test_support::test_state().await;
        let app = init_test_app!(state);

        let user = test_support::seed_user(&state, "a@x.com", "Ann", "pw123456").await;

        let req = test::TestRequest::get()
            .uri("/logout")
            .cookie(test_support::session_cookie_for(&user))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(test_support::location(&resp), "/");
        let cleared = test_support::response_cookie(&resp, "session").expect("removal cookie");
        assert!(cleared.value().is_empty());
    }
}
