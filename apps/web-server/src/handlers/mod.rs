//! HTTP handlers and route configuration.

mod auth;
mod authors;
mod contact;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(posts::index))
        .route("/register", web::get().to(auth::register_form))
        .route("/register", web::post().to(auth::register))
        .route("/login", web::get().to(auth::login_form))
        .route("/login", web::post().to(auth::login))
        .route("/logout", web::get().to(auth::logout))
        .route("/post/{post_id}", web::get().to(posts::show))
        .route("/post/{post_id}", web::post().to(posts::add_comment))
        .route("/new-post", web::get().to(posts::new_form))
        .route("/new-post", web::post().to(posts::create))
        .route("/edit-post/{post_id}", web::get().to(posts::edit_form))
        .route("/edit-post/{post_id}", web::post().to(posts::edit))
        .route("/delete/{post_id}", web::get().to(posts::delete))
        .route("/contact", web::get().to(contact::contact_form))
        .route("/contact", web::post().to(contact::send))
        .route("/{name}_blogs", web::get().to(authors::author_blogs));
}
