use std::sync::Arc;
use sea_orm::ConnectOptions;
use user_service::db::database_service::DatabaseService;

pub mod client;

pub struct TestContext {
    pub db: Arc<DatabaseService>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // a single pooled connection, otherwise every pool member would get
        // its own private in-memory database
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);

        let db = Arc::new(
            DatabaseService::with_options(options)
                .await
                .expect("Failed to initialize DatabaseService"),
        );

        TestContext { db }
    }
}

// Test data helpers
pub mod test_data {
    use user_service::types::user::{RUserCreate, RUserUpdate};

    #[allow(dead_code)]
    pub fn sample_user() -> RUserCreate {
        RUserCreate {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_user_with_email(email: &str) -> RUserCreate {
        RUserCreate {
            name: "Test User".to_string(),
            email: email.to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn email_patch(email: &str) -> RUserUpdate {
        RUserUpdate {
            email: Some(email.to_string()),
            ..Default::default()
        }
    }

    #[allow(dead_code)]
    pub fn name_patch(name: &str) -> RUserUpdate {
        RUserUpdate {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }
}
