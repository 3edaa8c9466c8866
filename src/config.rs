use anyhow::Result;
use sea_orm::Database;

use crate::schemas::AppState;

/// Compose the database URL from the environment.
///
/// `DATABASE_URL` wins when set. Otherwise the URL is assembled from the
/// individual `POSTGRES_*` variables, each falling back to the local
/// development database defaults.
pub fn database_url() -> String {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        return url;
    }

    let host = std::env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = std::env::var("POSTGRES_PORT").unwrap_or_else(|_| "5431".to_string());
    let user = std::env::var("POSTGRES_USER").unwrap_or_else(|_| "app".to_string());
    let password = std::env::var("POSTGRES_PASSWORD").unwrap_or_else(|_| "secret".to_string());
    let db = std::env::var("POSTGRES_DB").unwrap_or_else(|_| "app".to_string());

    format!("postgres://{user}:{password}@{host}:{port}/{db}")
}

/// Initialize application state against the given database
pub async fn initialize_app_state(database_url: &str) -> Result<AppState> {
    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    Ok(AppState { db })
}
