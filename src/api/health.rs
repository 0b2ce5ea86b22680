use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::services::{StoreStatus, UserService};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub store: StoreStatus,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service status, including the user store", body = HealthResponse)
    )
)]
pub async fn health_check(users: web::Data<UserService>) -> impl Responder {
    let store = users.store_status().await;
    let status = match store {
        StoreStatus::Unavailable => "degraded",
        StoreStatus::Connected | StoreStatus::NotConfigured => "healthy",
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store,
        timestamp: chrono::Utc::now().timestamp(),
    })
}
