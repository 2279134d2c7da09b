use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogsiteUser::Table)
                    .if_not_exists()
                    .col(pk_auto(BlogsiteUser::Id))
                    .col(string_uniq(BlogsiteUser::Username))
                    .col(string_uniq(BlogsiteUser::Email))
                    .col(string(BlogsiteUser::Password))
                    .col(boolean(BlogsiteUser::IsActive).default(true))
                    .col(boolean(BlogsiteUser::IsStaff).default(false))
                    .col(timestamp(BlogsiteUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogsiteUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BlogsiteUser {
    Table,
    Id,
    Username,
    Email,
    Password,
    IsActive,
    IsStaff,
    CreatedAt,
}
