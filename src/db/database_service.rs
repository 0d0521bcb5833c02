use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Store handle shared by every request handler. Owns the connection pool
/// and brings the schema up to date once at startup.
#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) db: DatabaseConnection,
}

impl DatabaseService {
    pub async fn new(url: &str) -> Result<Self, DbErr> {
        Self::with_options(ConnectOptions::new(url)).await
    }

    /// Connect with explicit options; the test harness uses this to pin
    /// in-memory SQLite to a single pooled connection.
    pub async fn with_options(options: ConnectOptions) -> Result<Self, DbErr> {
        log::info!("connecting to database");
        let db = Database::connect(options).await?;
        log::info!("running migrations");
        Migrator::up(&db, None).await?;
        log::info!("database ready");
        Ok(Self { db })
    }
}
