use chrono::Utc;
use model::entities::advert;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set, SqlErr};
use tracing::{debug, error, info, trace, warn};

use crate::error::ApiError;
use crate::unit::UnitOfWork;

/// Look up an advert by primary key.
pub async fn fetch_by_id(unit: &UnitOfWork, advert_id: i32) -> Result<advert::Model, ApiError> {
    trace!("Fetching advert with ID: {}", advert_id);
    match advert::Entity::find_by_id(advert_id).one(unit.conn()).await? {
        Some(advert_model) => {
            debug!("Found advert {} ({})", advert_model.id, advert_model.name);
            Ok(advert_model)
        }
        None => {
            warn!("Advert with ID {} not found", advert_id);
            Err(ApiError::NotFound("Advert not found".to_string()))
        }
    }
}

/// Insert a new advert and commit the unit.
///
/// The creation timestamp is stamped from the current UTC time here rather
/// than left to the column default, so the stored value never depends on the
/// database server clock. A duplicate name surfaces as a conflict and leaves
/// no row behind.
pub async fn create(
    unit: UnitOfWork,
    name: String,
    description: String,
    owner_id: i32,
) -> Result<i32, ApiError> {
    trace!("Inserting new advert into database");
    let new_advert = advert::ActiveModel {
        name: Set(name.clone()),
        description: Set(description),
        created_at: Set(Utc::now().naive_utc()),
        owner_id: Set(owner_id),
        ..Default::default()
    };

    match new_advert.insert(unit.conn()).await {
        Ok(advert_model) => {
            unit.commit().await?;
            info!("Advert created with ID: {}, name: {}", advert_model.id, advert_model.name);
            Ok(advert_model.id)
        }
        Err(db_error) => {
            if matches!(db_error.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                warn!("Advert with name '{}' already exists", name);
                Err(ApiError::Conflict("Advert already exists".to_string()))
            } else {
                error!("Failed to create advert '{}': {}", name, db_error);
                Err(db_error.into())
            }
        }
    }
}

/// Delete a fetched advert and commit the unit.
pub async fn remove(unit: UnitOfWork, advert_model: advert::Model) -> Result<(), ApiError> {
    let advert_id = advert_model.id;
    trace!("Deleting advert with ID: {}", advert_id);
    advert_model.delete(unit.conn()).await?;
    unit.commit().await?;
    info!("Advert with ID {} deleted", advert_id);
    Ok(())
}
