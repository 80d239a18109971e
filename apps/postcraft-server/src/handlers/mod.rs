//! HTTP handlers and route configuration.

mod api;
mod convert;
mod health;
mod pages;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // HTML page
        .route("/", web::get().to(pages::index))
        .route("/generate", web::post().to(pages::generate))
        .route("/save", web::post().to(pages::save))
        .route("/view/{view}", web::post().to(pages::switch_view))
        .route("/posts/{id}/copy/{kind}", web::post().to(pages::copy))
        // JSON API
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/workspace")
                        .route("", web::get().to(api::workspace))
                        .route("/draft", web::put().to(api::update_draft))
                        .route("/generate", web::post().to(api::generate))
                        .route("/save", web::post().to(api::save))
                        .route("/view", web::post().to(api::switch_view)),
                )
                .service(
                    web::scope("/posts")
                        .route("", web::get().to(api::list_posts))
                        .route("/{id}/copy", web::post().to(api::copy)),
                ),
        );
}
