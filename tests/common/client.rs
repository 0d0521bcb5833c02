use actix_web::{web, App};
use entity::user::Model as UserModel;
use std::sync::Arc;
use user_service::{
    db::database_service::DatabaseService,
    routes::{configure_routes, json_config},
    types::error::AppError,
};

pub struct TestClient {
    pub db: Arc<DatabaseService>,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(json_config())
            .configure(configure_routes)
    }

    /// Seed a user straight through the store, bypassing the HTTP surface.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: &str) -> Result<UserModel, AppError> {
        self.db
            .insert_user("Test User".to_string(), email.to_string())
            .await
    }
}
