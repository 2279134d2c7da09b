use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000002_region::Region;

static IDX_DISTRICT_REGION_ID: &str = "idx-district-region_id";
static FK_DISTRICT_REGION_ID: &str = "fk-district-region_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(District::Table)
                    .if_not_exists()
                    .col(pk_auto(District::Id))
                    .col(string(District::Name))
                    .col(integer(District::RegionId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DISTRICT_REGION_ID)
                    .table(District::Table)
                    .col(District::RegionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DISTRICT_REGION_ID)
                    .from_tbl(District::Table)
                    .from_col(District::RegionId)
                    .to_tbl(Region::Table)
                    .to_col(Region::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DISTRICT_REGION_ID)
                    .table(District::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DISTRICT_REGION_ID)
                    .table(District::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(District::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum District {
    Table,
    Id,
    Name,
    RegionId,
}
