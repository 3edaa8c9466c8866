use model::entities::user;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set, SqlErr};
use tracing::{debug, error, info, trace, warn};

use crate::error::ApiError;
use crate::unit::UnitOfWork;

/// Look up a user by primary key.
pub async fn fetch_by_id(unit: &UnitOfWork, user_id: i32) -> Result<user::Model, ApiError> {
    trace!("Fetching user with ID: {}", user_id);
    match user::Entity::find_by_id(user_id).one(unit.conn()).await? {
        Some(user_model) => {
            debug!("Found user {} ({})", user_model.id, user_model.mail);
            Ok(user_model)
        }
        None => {
            warn!("User with ID {} not found", user_id);
            Err(ApiError::NotFound("User not found".to_string()))
        }
    }
}

/// Insert a new user and commit the unit.
///
/// `password` must already be hashed by the caller. A duplicate mail address
/// surfaces as a conflict and leaves no row behind.
pub async fn create(unit: UnitOfWork, mail: String, password: String) -> Result<i32, ApiError> {
    trace!("Inserting new user into database");
    let new_user = user::ActiveModel {
        mail: Set(mail.clone()),
        password: Set(password),
        ..Default::default()
    };

    match new_user.insert(unit.conn()).await {
        Ok(user_model) => {
            unit.commit().await?;
            info!("User created with ID: {}, mail: {}", user_model.id, user_model.mail);
            Ok(user_model.id)
        }
        Err(db_error) => {
            if matches!(db_error.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                warn!("User with mail '{}' already exists", mail);
                Err(ApiError::Conflict("User already exists".to_string()))
            } else {
                error!("Failed to create user '{}': {}", mail, db_error);
                Err(db_error.into())
            }
        }
    }
}

/// Delete a fetched user and commit the unit.
pub async fn remove(unit: UnitOfWork, user_model: user::Model) -> Result<(), ApiError> {
    let user_id = user_model.id;
    trace!("Deleting user with ID: {}", user_id);
    user_model.delete(unit.conn()).await?;
    unit.commit().await?;
    info!("User with ID {} deleted", user_id);
    Ok(())
}
