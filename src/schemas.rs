use sea_orm::DatabaseConnection;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
}

/// Response body carrying the id of a newly created entity
#[derive(Serialize, ToSchema)]
pub struct CreatedResponse {
    /// Generated id of the created row
    pub id: i32,
}

/// Acknowledgement body for a completed delete
#[derive(Serialize, ToSchema)]
pub struct DeletedResponse {
    /// Always the literal "deleted"
    pub status: String,
}

/// Error response body shared by all failure modes
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of the failure
    pub error: String,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::users::create_user,
        crate::handlers::users::get_user,
        crate::handlers::users::delete_user,
        crate::handlers::adverts::create_advert,
        crate::handlers::adverts::get_advert,
        crate::handlers::adverts::delete_advert,
    ),
    components(
        schemas(
            CreatedResponse,
            DeletedResponse,
            ErrorBody,
            HealthResponse,
            crate::handlers::users::CreateUserRequest,
            crate::handlers::users::UserResponse,
            crate::handlers::adverts::CreateAdvertRequest,
            crate::handlers::adverts::DeleteAdvertRequest,
            crate::handlers::adverts::AdvertResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User registration and lookup"),
        (name = "adverts", description = "Advert submission and ownership-gated removal"),
    ),
    info(
        title = "Adboard API",
        description = "A minimal advert board: user accounts and classified adverts over a relational store",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
