//! # Vellum Shared
//!
//! Form payloads and small presentation helpers shared by the web layer.

pub mod avatar;
pub mod forms;

pub use forms::{CommentForm, ContactForm, LoginForm, PostForm, RegisterForm};
