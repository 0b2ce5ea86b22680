use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;

use crate::models::{self, EchoPayload, EchoResponse, GreetingResponse};

pub const WELCOME_MESSAGE: &str = "Hello, World! 🚀 Server is running.";

#[utoipa::path(
    get,
    path = "/",
    tag = "Greetings",
    responses(
        (status = 200, description = "Plain text welcome message", body = String, content_type = "text/plain")
    )
)]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(WELCOME_MESSAGE)
}

#[utoipa::path(
    get,
    path = "/api/greet/{name}",
    tag = "Greetings",
    params(
        ("name" = String, Path, description = "Name to greet")
    ),
    responses(
        (status = 200, description = "Greeting for the given name", body = GreetingResponse)
    )
)]
pub async fn greet(name: web::Path<String>) -> impl Responder {
    log::debug!("👋 GET /api/greet/{}", name);
    HttpResponse::Ok().json(models::greeting(&name))
}

#[utoipa::path(
    post,
    path = "/api/data",
    tag = "Greetings",
    request_body = EchoPayload,
    responses(
        (status = 200, description = "The key/value pair, echoed back", body = EchoResponse),
        (status = 400, description = "Malformed JSON body", body = crate::api::ErrorResponse)
    )
)]
pub async fn echo(body: web::Json<Value>) -> impl Responder {
    log::debug!("📨 POST /api/data");
    HttpResponse::Ok().json(EchoResponse {
        received: EchoPayload::from(body.into_inner()),
    })
}
