//! Shared helpers for handler tests: an in-memory SQLite store with the
//! schema migrated, plus the services handlers expect in app data.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;

use vellum_core::domain::{BlogPost, User};
use vellum_core::ports::{BaseRepository, Mailer, PasswordService, SessionTokenService};
use vellum_infra::database::DatabaseConfig;
use vellum_infra::{LogMailer, Pbkdf2PasswordService, SessionConfig, SignedSessionService};

use crate::state::AppState;

/// Fresh in-memory store with the schema migrated. A single pooled
/// connection keeps the database alive for the whole test.
pub async fn test_state() -> AppState {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    AppState::new(&config).await.expect("in-memory store")
}

pub fn passwords() -> Arc<dyn PasswordService> {
    Arc::new(Pbkdf2PasswordService::new())
}

pub fn sessions() -> Arc<dyn SessionTokenService> {
    Arc::new(SignedSessionService::new(SessionConfig {
        secret: "test-secret".to_string(),
        ttl_hours: 1,
    }))
}

pub fn mailer() -> Arc<dyn Mailer> {
    Arc::new(LogMailer)
}

/// Build the service under test with the full app data stack.
macro_rules! init_test_app {
    ($state:expr) => {{
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state.clone()))
                .app_data(actix_web::web::Data::new(crate::test_support::passwords()))
                .app_data(actix_web::web::Data::new(crate::test_support::sessions()))
                .app_data(actix_web::web::Data::new(crate::test_support::mailer()))
                .configure(crate::handlers::configure_routes),
        )
        .await
    }};
}
pub(crate) use init_test_app;

/// Insert a user directly into the store, password hashed for real.
pub async fn seed_user(state: &AppState, email: &str, name: &str, password: &str) -> User {
    let hash = passwords().hash(password).unwrap();
    state
        .users
        .insert(User::new(email.to_string(), hash, name.to_string()))
        .await
        .unwrap()
}

/// Insert a post directly into the store.
pub async fn seed_post(state: &AppState, author: &User, title: &str) -> BlogPost {
    state
        .posts
        .insert(BlogPost::new(
            author.id,
            title.to_string(),
            "A subtitle".to_string(),
            "Some body".to_string(),
            "http://x/i.png".to_string(),
        ))
        .await
        .unwrap()
}

/// Session cookie for a seeded user, signed with the test secret.
pub fn session_cookie_for(user: &User) -> Cookie<'static> {
    let token = sessions().issue(user.id).unwrap();
    Cookie::build("session", token).path("/").finish()
}

/// A named cookie from a response, if set.
pub fn response_cookie<B: MessageBody>(
    resp: &ServiceResponse<B>,
    name: &str,
) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == name)
        .map(|c| c.into_owned())
}

/// Flash messages carried by a response's Set-Cookie, if any.
pub fn flash_messages<B: MessageBody>(resp: &ServiceResponse<B>) -> Vec<String> {
    response_cookie(resp, "flash")
        .map(|c| crate::flash::decode(c.value()))
        .unwrap_or_default()
}

/// Location header of a redirect response.
pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(actix_web::http::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
