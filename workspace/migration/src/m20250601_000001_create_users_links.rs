use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table.
        //
        // The unique indexes on identity_ref and username are the only
        // place uniqueness is enforced: two racing claims for the same
        // username are resolved atomically at insert time by the store,
        // never by an application-level pre-check.
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::IdentityRef).unique_key())
                    .col(string(Users::Email))
                    .col(string(Users::Username).unique_key())
                    .col(string_null(Users::Name))
                    .col(timestamp_with_time_zone(Users::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Create links table
        manager
            .create_table(
                Table::create()
                    .table(Links::Table)
                    .if_not_exists()
                    .col(pk_auto(Links::Id))
                    .col(string(Links::Title))
                    .col(string(Links::Url))
                    .col(integer(Links::OwnerId))
                    .col(timestamp_with_time_zone(Links::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_link_owner")
                            .from(Links::Table, Links::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Links::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    IdentityRef,
    Email,
    Username,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Links {
    Table,
    Id,
    Title,
    Url,
    OwnerId,
    CreatedAt,
}
