//! This file serves as the root for all SeaORM entity modules.
//! The advert board only persists two kinds of rows: registered users and
//! the adverts they own. The schema is deliberately denormalized, adverts
//! reference their owner by plain integer id without a foreign key.

pub mod advert;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::advert::Entity as Advert;
    pub use super::user::Entity as User;
}

#[cfg(test)]
mod test {
    use chrono::Utc;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, DbErr, EntityTrait, Set};

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        // Apply migrations so the tables exist
        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        // Setup database
        let db = setup_db().await?;

        // Create a user
        let owner = user::ActiveModel {
            mail: Set("owner@example.com".to_string()),
            password: Set("hashed".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Create an advert owned by that user
        let advert = advert::ActiveModel {
            name: Set("Old bicycle".to_string()),
            description: Set("Three gears, slightly rusty".to_string()),
            created_at: Set(Utc::now().naive_utc()),
            owner_id: Set(owner.id),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Read back and verify data
        let users = User::find().all(&db).await?;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].mail, "owner@example.com");
        assert_eq!(users[0].password, "hashed");

        let adverts = Advert::find().all(&db).await?;
        assert_eq!(adverts.len(), 1);
        assert_eq!(adverts[0].name, "Old bicycle");
        assert_eq!(adverts[0].owner_id, owner.id);
        assert_eq!(adverts[0].created_at, advert.created_at);

        // The mail column carries a unique index
        let duplicate = user::ActiveModel {
            mail: Set("owner@example.com".to_string()),
            password: Set("another-hash".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await;
        assert!(duplicate.is_err());

        Ok(())
    }
}
