use actix_web::get;
use serde::Serialize;

use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
}

#[get("")]
async fn health() -> ApiResult<Health> {
    Ok(ApiResponse::Ok(Health { status: "ok" }))
}
