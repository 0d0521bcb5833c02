use std::sync::Arc;

use actix_web::{get, web};
use entity::user::Model as UserModel;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
async fn list(db: web::Data<Arc<DatabaseService>>) -> ApiResult<Vec<UserModel>> {
    let users = db.list_users().await?;
    Ok(ApiResponse::Ok(users))
}
