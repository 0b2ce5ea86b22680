use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Greeting Service API",
        version = "1.0.0",
        description = "Greeting and echo endpoints plus a small user API backed by MongoDB.\n\n**Users:** `name` and `email` are required and `email` must be unique."
    ),
    paths(
        // Greetings
        crate::api::greetings::index,
        crate::api::greetings::greet,
        crate::api::greetings::echo,

        // Users
        crate::api::users::create_user,
        crate::api::users::list_users,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::GreetingResponse,
            crate::models::EchoPayload,
            crate::models::EchoResponse,
            crate::models::User,
            crate::models::CreateUserRequest,
            crate::api::users::CreateUserResponse,
            crate::api::ErrorResponse,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
            crate::services::StoreStatus,
        )
    ),
    tags(
        (name = "Greetings", description = "Welcome message, greetings and JSON echo. No database required."),
        (name = "Users", description = "Create and list users. Requires a configured MongoDB store."),
        (name = "Health", description = "Health check and request metrics."),
    )
)]
pub struct ApiDoc;
