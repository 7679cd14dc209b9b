//! Error handling for the server-rendered pages.
//!
//! Validation failures never reach this type; handlers answer those with a
//! flash and a redirect. `AppError` covers the rest: not-found, bad client
//! input, uniqueness conflicts, and internal failures.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use askama::Template;
use std::fmt;

use crate::views::ErrorPage;

/// Application-level error type that renders as an error page.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Forbidden,
    Conflict(String),
    Internal(String),
}

impl AppError {
    pub fn internal(e: impl fmt::Display) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Forbidden => write!(f, "Forbidden"),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (title, detail) = match self {
            AppError::NotFound(detail) => ("Not Found", detail.clone()),
            AppError::BadRequest(detail) => ("Bad Request", detail.clone()),
            AppError::Forbidden => ("Forbidden", "You may not modify this post.".to_string()),
            AppError::Conflict(detail) => ("Conflict", detail.clone()),
            AppError::Internal(detail) => {
                // Log internal errors, keep the page generic
                tracing::error!("Internal error: {}", detail);
                ("Internal Server Error", "Something went wrong.".to_string())
            }
        };

        let page = ErrorPage {
            title: title.to_string(),
            detail,
        };
        let body = page
            .render()
            .unwrap_or_else(|_| format!("<h1>{title}</h1>"));

        HttpResponse::build(self.status_code())
            .content_type("text/html; charset=utf-8")
            .body(body)
    }
}

// Conversion from domain errors
impl From<vellum_core::error::DomainError> for AppError {
    fn from(err: vellum_core::error::DomainError) -> Self {
        match err {
            vellum_core::error::DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            vellum_core::error::DomainError::Validation(msg) => AppError::BadRequest(msg),
            vellum_core::error::DomainError::Duplicate(msg) => AppError::Conflict(msg),
            vellum_core::error::DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<vellum_core::error::RepoError> for AppError {
    fn from(err: vellum_core::error::RepoError) -> Self {
        match err {
            vellum_core::error::RepoError::NotFound => {
                AppError::NotFound("Resource not found".to_string())
            }
            vellum_core::error::RepoError::Constraint(msg) => AppError::Conflict(msg),
            vellum_core::error::RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            vellum_core::error::RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Internal(format!("template rendering failed: {err}"))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
