//! Session-based authentication extractors.
//!
//! `Identity` is the guard composed in front of protected handlers: an
//! anonymous request is answered with a login redirect and a flash rather
//! than an error page. `OptionalIdentity` never fails and lets public
//! pages adjust their rendering to the session state.
//!
//! The identity is resolved per request by verifying the session cookie
//! against the store; nothing is kept in ambient global state.

use actix_web::cookie::{Cookie, time::Duration};
use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::{FromRequest, HttpRequest, HttpResponse, web};
use futures::future::LocalBoxFuture;
use std::sync::Arc;

use vellum_core::domain::User;
use vellum_core::ports::{BaseRepository, SessionTokenService};

use crate::flash;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "session";

/// The authenticated user resolved for this request.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user: User,
}

/// Session cookie holding a freshly issued token.
pub fn session_cookie(token: String, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}

/// Removal cookie ending the session.
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .max_age(Duration::ZERO)
        .finish()
}

/// Why a request could not be tied to a user.
#[derive(Debug)]
pub enum IdentityRejection {
    /// No usable session cookie. Tampered and expired tokens land here too.
    NotLoggedIn,
    /// The session referenced a user row that no longer exists.
    UnknownUser,
    /// The server is misconfigured or the store failed.
    Internal(String),
}

impl std::fmt::Display for IdentityRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentityRejection::NotLoggedIn => write!(f, "not logged in"),
            IdentityRejection::UnknownUser => write!(f, "session user no longer exists"),
            IdentityRejection::Internal(msg) => write!(f, "identity resolution failed: {msg}"),
        }
    }
}

impl actix_web::ResponseError for IdentityRejection {
    fn status_code(&self) -> StatusCode {
        match self {
            IdentityRejection::NotLoggedIn => StatusCode::SEE_OTHER,
            IdentityRejection::UnknownUser => StatusCode::NOT_FOUND,
            IdentityRejection::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            IdentityRejection::NotLoggedIn => flash::redirect("/login", "You need to log in."),
            IdentityRejection::UnknownUser => {
                HttpResponse::NotFound().body("The requested user no longer exists")
            }
            IdentityRejection::Internal(detail) => {
                tracing::error!("Identity resolution failed: {detail}");
                HttpResponse::InternalServerError().body("Internal server error")
            }
        }
    }
}

impl FromRequest for Identity {
    type Error = IdentityRejection;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| IdentityRejection::Internal("AppState not configured".to_string()))?
                .clone();
            let sessions = req
                .app_data::<web::Data<Arc<dyn SessionTokenService>>>()
                .ok_or_else(|| {
                    IdentityRejection::Internal("SessionTokenService not configured".to_string())
                })?
                .clone();

            let cookie = req
                .cookie(SESSION_COOKIE)
                .ok_or(IdentityRejection::NotLoggedIn)?;

            let claims = sessions
                .verify(cookie.value())
                .map_err(|_| IdentityRejection::NotLoggedIn)?;

            let user = state
                .users
                .find_by_id(claims.user_id)
                .await
                .map_err(|e| IdentityRejection::Internal(e.to_string()))?
                .ok_or(IdentityRejection::UnknownUser)?;

            Ok(Identity { user })
        })
    }
}

/// Optional identity extractor - anonymous instead of failing.
pub struct OptionalIdentity(pub Option<Identity>);

impl FromRequest for OptionalIdentity {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Identity::from_request(req, payload);
        Box::pin(async move { Ok(OptionalIdentity(fut.await.ok())) })
    }
}
