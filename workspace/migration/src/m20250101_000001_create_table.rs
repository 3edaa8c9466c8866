use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create app_users table
        manager
            .create_table(
                Table::create()
                    .table(AppUsers::Table)
                    .if_not_exists()
                    .col(pk_auto(AppUsers::Id))
                    .col(string_len(AppUsers::Mail, 100).unique_key())
                    .col(string_len(AppUsers::Password, 100))
                    .to_owned(),
            )
            .await?;

        // Create app_adverts table. OwnerId is a plain integer column: the
        // referenced user may be deleted without touching the advert.
        manager
            .create_table(
                Table::create()
                    .table(AppAdverts::Table)
                    .if_not_exists()
                    .col(pk_auto(AppAdverts::Id))
                    .col(string_len(AppAdverts::Name, 100).unique_key())
                    .col(string_len(AppAdverts::Description, 100))
                    .col(timestamp(AppAdverts::CreatedAt).default(Expr::current_timestamp()))
                    .col(integer(AppAdverts::OwnerId))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order
        manager
            .drop_table(Table::drop().table(AppAdverts::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AppUsers::Table).to_owned())
            .await?;

        Ok(())
    }
}

// Define identifiers for all tables

#[derive(DeriveIden)]
enum AppUsers {
    Table,
    Id,
    Mail,
    Password,
}

#[derive(DeriveIden)]
enum AppAdverts {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    OwnerId,
}
