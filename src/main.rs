use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use user_service::config::EnvConfig;
use user_service::db::database_service::DatabaseService;
use user_service::routes::{configure_routes, json_config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let database_service = Arc::new(
        DatabaseService::new(&config.db_url)
            .await
            .expect("Failed to initialize DatabaseService"),
    );

    log::info!("starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&database_service)))
            .app_data(json_config())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
