//! Form payloads and their validation rules.
//!
//! Every user-facing form deserializes into one of these structs; handlers
//! run `validate()` and flash the flattened messages on failure.

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// Extensions accepted for a post's header image.
pub const IMAGE_EXTENSIONS: [&str; 7] =
    [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".webp"];

/// Registration form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Login form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Post authoring form, shared by the create and edit pages.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Subtitle is required"))]
    pub subtitle: String,
    #[validate(length(min = 1, message = "Body is required"))]
    pub body: String,
    #[validate(custom = "validate_image_url")]
    pub img_url: String,
}

/// Comment form on the post detail page.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentForm {
    #[validate(length(min = 1, message = "Comment text is required"))]
    pub comment_body: String,
}

/// Contact-the-author form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(email(message = "Recipient address is invalid"))]
    pub to: String,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// The URL's path must end in a recognized image extension. The query
/// string and fragment are ignored, the suffix match is case-insensitive.
pub fn validate_image_url(url: &str) -> Result<(), ValidationError> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let lowered = path.to_ascii_lowercase();
    if IMAGE_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext)) {
        Ok(())
    } else {
        let mut err = ValidationError::new("img_url");
        err.message = Some(
            "Please enter a valid image URL ending with '.jpg', '.jpeg', '.png', \
             '.gif', '.bmp', '.svg' or '.webp'"
                .into(),
        );
        Err(err)
    }
}

/// Flatten validator output into user-facing flash messages.
pub fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages
}
