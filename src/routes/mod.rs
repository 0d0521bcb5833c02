use actix_web::web;

use crate::types::error::AppError;

pub mod health;
pub mod users;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/api/users")
            .service(users::list::list)
            .service(users::create::create)
            .service(users::update::update)
            .service(users::delete::delete),
    );
}

/// JSON extractor configuration: a body that fails to decode gets the
/// standard 400 envelope instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("rejecting request body: {err}");
        AppError::BadRequest("Invalid JSON format.".to_string()).into()
    })
}
