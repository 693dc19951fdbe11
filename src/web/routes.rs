use actix_web::web;
use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/", web::get().to(handlers::root))
            .route("/status", web::post().to(handlers::create_status_check))
            .route("/status", web::get().to(handlers::get_status_checks))
            .route("/chat", web::post().to(handlers::chat)),
    );
}
