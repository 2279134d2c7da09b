use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Site::Table)
                    .if_not_exists()
                    .col(pk_auto(Site::Id))
                    .col(string(Site::Name))
                    .col(string(Site::Picture))
                    .col(text(Site::AboutUs))
                    .col(json(Site::Social))
                    .col(string(Site::Address))
                    .col(string(Site::Email))
                    .col(string(Site::Phone))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Site::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Site {
    Table,
    Id,
    Name,
    Picture,
    AboutUs,
    Social,
    Address,
    Email,
    Phone,
}
