use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::api::{error_response, ErrorResponse};
use crate::models::{CreateUserRequest, User};
use crate::services::UserService;

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserResponse {
    pub message: String,
    pub user: User,
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreateUserResponse),
        (status = 400, description = "Missing name/email or email already registered", body = ErrorResponse),
        (status = 500, description = "User store unavailable", body = ErrorResponse)
    )
)]
pub async fn create_user(
    users: web::Data<UserService>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse {
    let email = request.email.clone().unwrap_or_else(|| "N/A".to_string());
    log::info!("📝 POST /api/users - email: {}", email);

    match users.create_user(request.into_inner()).await {
        Ok(user) => HttpResponse::Created().json(CreateUserResponse {
            message: "User created successfully".to_string(),
            user,
        }),
        Err(e) => {
            log::warn!("❌ User creation failed: {} - {}", email, e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 500, description = "User store unavailable", body = ErrorResponse)
    )
)]
pub async fn list_users(users: web::Data<UserService>) -> HttpResponse {
    log::info!("📋 GET /api/users");

    match users.list_users().await {
        Ok(list) => {
            log::info!("✅ Listed {} users", list.len());
            HttpResponse::Ok().json(list)
        }
        Err(e) => {
            log::error!("❌ Error listing users: {}", e);
            error_response(&e)
        }
    }
}
