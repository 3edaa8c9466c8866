use sea_orm::entity::prelude::*;

/// Represents a registered user of the advert board.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "app_users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Mail address used as the login identity.
    #[sea_orm(unique)]
    pub mail: String,
    /// Argon2 hash of the user's password, never the plaintext.
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
