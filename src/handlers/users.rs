use axum::extract::Path;
use axum::response::Json;
use model::entities::user;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::ToSchema;
use validator::Validate;

use crate::auth::hash_password;
use crate::error::ApiError;
use crate::extract::ValidJson;
use crate::repo;
use crate::schemas::{CreatedResponse, DeletedResponse, ErrorBody};
use crate::unit::UnitOfWork;

/// Request body for registering a new user
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    /// Mail address (must be unique)
    #[validate(email, length(max = 100))]
    pub mail: String,
    /// Plaintext password, persisted only as an Argon2 hash
    #[validate(length(min = 1, max = 100))]
    pub password: String,
}

/// User response model
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub mail: String,
    /// The stored password hash, returned exactly as persisted
    pub password: String,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            mail: model.mail,
            password: model.password,
        }
    }
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/user",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created successfully", body = CreatedResponse),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 409, description = "Mail address already registered", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[instrument(skip_all)]
pub async fn create_user(
    unit: UnitOfWork,
    ValidJson(request): ValidJson<CreateUserRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    trace!("Entering create_user function");
    debug!("Creating user with mail: {}", request.mail);

    let password = hash_password(&request.password)?;
    let id = repo::users::create(unit, request.mail, password).await?;

    info!("User created successfully with ID: {}", id);
    Ok(Json(CreatedResponse { id }))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/user/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[instrument(skip_all)]
pub async fn get_user(
    Path(user_id): Path<i32>,
    unit: UnitOfWork,
) -> Result<Json<UserResponse>, ApiError> {
    trace!("Entering get_user function for user_id: {}", user_id);

    let user_model = repo::users::fetch_by_id(&unit, user_id).await?;

    info!("Successfully retrieved user with ID: {}", user_model.id);
    Ok(Json(UserResponse::from(user_model)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/user/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = DeletedResponse),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[instrument(skip_all)]
pub async fn delete_user(
    Path(user_id): Path<i32>,
    unit: UnitOfWork,
) -> Result<Json<DeletedResponse>, ApiError> {
    trace!("Entering delete_user function for user_id: {}", user_id);
    debug!("Attempting to delete user with ID: {}", user_id);

    let user_model = repo::users::fetch_by_id(&unit, user_id).await?;
    repo::users::remove(unit, user_model).await?;

    info!("User with ID {} deleted successfully", user_id);
    Ok(Json(DeletedResponse {
        status: "deleted".to_string(),
    }))
}
