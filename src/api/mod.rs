pub mod greetings;
pub mod health;
pub mod metrics;
pub mod swagger;
pub mod users;

use actix_web::{error::InternalError, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::services::UserService;
use crate::utils::AppError;

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(err: &AppError) -> HttpResponse {
    HttpResponse::build(err.status_code()).json(ErrorResponse {
        error: err.message().to_string(),
    })
}

/// Malformed JSON bodies get the same `{"error": ...}` shape as handler errors
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("⚠️  Rejected request body: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorResponse {
            error: err.to_string(),
        });
        InternalError::from_response(err, response).into()
    })
}

/// Registers every route together with the user service it depends on.
///
/// ```ignore
/// App::new().configure(api::configure(web::Data::new(UserService::without_store())))
/// ```
pub fn configure(user_service: web::Data<UserService>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(user_service)
            .app_data(json_config())
            .route("/", web::get().to(greetings::index))
            .route("/health", web::get().to(health::health_check))
            .route("/metrics", web::get().to(metrics::get_metrics))
            .service(
                web::scope("/api")
                    .route("/greet/{name}", web::get().to(greetings::greet))
                    .route("/data", web::post().to(greetings::echo))
                    .route("/users", web::post().to(users::create_user))
                    .route("/users", web::get().to(users::list_users)),
            );
    }
}
