use axum::extract::Path;
use axum::response::Json;
use chrono::NaiveDateTime;
use model::entities::advert;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::ToSchema;
use validator::Validate;

use crate::auth::check_authority;
use crate::error::ApiError;
use crate::extract::ValidJson;
use crate::repo;
use crate::schemas::{CreatedResponse, DeletedResponse, ErrorBody};
use crate::unit::UnitOfWork;

/// Request body for posting a new advert
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateAdvertRequest {
    /// Listing title (must be unique)
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Free-text description of the offered item
    #[validate(length(min = 1, max = 100))]
    pub description: String,
    /// Id of the user who will own this advert
    pub owner_id: i32,
}

/// Request body for deleting an advert
///
/// The caller asserts the owning user by id. An absent field reads as user 0,
/// which never resolves to a stored user. Extra keys are ignored, only the
/// create bodies use a strict schema.
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct DeleteAdvertRequest {
    /// Id of the user claiming ownership
    #[serde(default)]
    pub owner_id: i32,
}

/// Advert response model
#[derive(Debug, Serialize, ToSchema)]
pub struct AdvertResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Creation timestamp in ISO 8601
    pub created_at: NaiveDateTime,
    pub owner_id: i32,
}

impl From<advert::Model> for AdvertResponse {
    fn from(model: advert::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: model.created_at,
            owner_id: model.owner_id,
        }
    }
}

/// Post a new advert
#[utoipa::path(
    post,
    path = "/advert",
    tag = "adverts",
    request_body = CreateAdvertRequest,
    responses(
        (status = 200, description = "Advert created successfully", body = CreatedResponse),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 409, description = "Advert name already taken", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[instrument(skip_all)]
pub async fn create_advert(
    unit: UnitOfWork,
    ValidJson(request): ValidJson<CreateAdvertRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    trace!("Entering create_advert function");
    debug!(
        "Creating advert '{}' for owner {}",
        request.name, request.owner_id
    );

    let id = repo::adverts::create(unit, request.name, request.description, request.owner_id).await?;

    info!("Advert created successfully with ID: {}", id);
    Ok(Json(CreatedResponse { id }))
}

/// Get a specific advert by ID
#[utoipa::path(
    get,
    path = "/advert/{advert_id}",
    tag = "adverts",
    params(
        ("advert_id" = i32, Path, description = "Advert ID"),
    ),
    responses(
        (status = 200, description = "Advert retrieved successfully", body = AdvertResponse),
        (status = 404, description = "Advert not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[instrument(skip_all)]
pub async fn get_advert(
    Path(advert_id): Path<i32>,
    unit: UnitOfWork,
) -> Result<Json<AdvertResponse>, ApiError> {
    trace!("Entering get_advert function for advert_id: {}", advert_id);

    let advert_model = repo::adverts::fetch_by_id(&unit, advert_id).await?;

    info!("Successfully retrieved advert with ID: {}", advert_model.id);
    Ok(Json(AdvertResponse::from(advert_model)))
}

/// Delete an advert, allowed only for its owner
///
/// The advert is fetched first, then the user named in the body. The
/// ownership check runs before the delete is issued, so a failed check
/// leaves the advert in place.
#[utoipa::path(
    delete,
    path = "/advert/{advert_id}",
    tag = "adverts",
    params(
        ("advert_id" = i32, Path, description = "Advert ID"),
    ),
    request_body = DeleteAdvertRequest,
    responses(
        (status = 200, description = "Advert deleted successfully", body = DeletedResponse),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 403, description = "Requesting user is not the owner", body = ErrorBody),
        (status = 404, description = "Advert or user not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[instrument(skip_all)]
pub async fn delete_advert(
    Path(advert_id): Path<i32>,
    unit: UnitOfWork,
    ValidJson(request): ValidJson<DeleteAdvertRequest>,
) -> Result<Json<DeletedResponse>, ApiError> {
    trace!("Entering delete_advert function for advert_id: {}", advert_id);
    debug!(
        "User {} requests deletion of advert {}",
        request.owner_id, advert_id
    );

    let advert_model = repo::adverts::fetch_by_id(&unit, advert_id).await?;
    let user_model = repo::users::fetch_by_id(&unit, request.owner_id).await?;
    check_authority(&user_model, &advert_model)?;
    repo::adverts::remove(unit, advert_model).await?;

    info!("Advert with ID {} deleted successfully", advert_id);
    Ok(Json(DeletedResponse {
        status: "deleted".to_string(),
    }))
}
