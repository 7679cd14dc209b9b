//! One-shot flash messages, carried across a redirect in a cookie.
//!
//! The cookie value is base64-encoded JSON so messages survive the
//! characters a Set-Cookie header cannot carry. Pages that render the
//! messages answer with a removal cookie.

use actix_web::cookie::{Cookie, time::Duration};
use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use std::future::{Ready, ready};

const FLASH_COOKIE: &str = "flash";

/// Messages flashed by the previous request, consumed on render.
#[derive(Debug, Clone, Default)]
pub struct Flash(pub Vec<String>);

impl FromRequest for Flash {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let messages = req
            .cookie(FLASH_COOKIE)
            .map(|c| decode(c.value()))
            .unwrap_or_default();
        ready(Ok(Flash(messages)))
    }
}

fn encode(messages: &[String]) -> String {
    URL_SAFE_NO_PAD.encode(serde_json::to_vec(messages).unwrap_or_default())
}

pub(crate) fn decode(value: &str) -> Vec<String> {
    URL_SAFE_NO_PAD
        .decode(value)
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}

/// Cookie storing messages for the next request.
fn set_cookie(messages: &[String]) -> Cookie<'static> {
    Cookie::build(FLASH_COOKIE, encode(messages))
        .path("/")
        .http_only(true)
        .finish()
}

/// Removal cookie, sent once the messages have been rendered.
pub fn clear_cookie() -> Cookie<'static> {
    Cookie::build(FLASH_COOKIE, "")
        .path("/")
        .http_only(true)
        .max_age(Duration::ZERO)
        .finish()
}

/// 303 redirect carrying one flash message.
pub fn redirect(location: &str, message: &str) -> HttpResponse {
    redirect_many(location, &[message.to_string()])
}

/// 303 redirect carrying several flash messages.
pub fn redirect_many(location: &str, messages: &[String]) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .cookie(set_cookie(messages))
        .finish()
}

/// Plain 303 redirect without a flash.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_messages() {
        let messages = vec!["Email already taken, please try again.".to_string()];
        assert_eq!(decode(&encode(&messages)), messages);
    }

    #[test]
    fn garbage_cookie_decodes_to_nothing() {
        assert!(decode("not base64 json!").is_empty());
    }

    #[test]
    fn cookie_value_is_header_safe() {
        let cookie = set_cookie(&["has spaces, commas; and \"quotes\"".to_string()]);
        assert!(
            cookie
                .value()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }
}
