use sea_orm::entity::prelude::*;

/// Represents a single classified advert.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "app_adverts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Listing title, unique across the whole board.
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    /// Stamped by the application when the advert is inserted.
    pub created_at: DateTime,
    /// Id of the user entitled to delete this advert. Plain integer, the
    /// schema does not enforce referential integrity.
    pub owner_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
