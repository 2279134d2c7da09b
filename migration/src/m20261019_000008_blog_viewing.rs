use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000006_blog::Blog;

static IDX_BLOG_VIEWING_BLOG_ID: &str = "idx-blog_viewing-blog_id";
static FK_BLOG_VIEWING_BLOG_ID: &str = "fk-blog_viewing-blog_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogViewing::Table)
                    .if_not_exists()
                    .col(pk_auto(BlogViewing::Id))
                    .col(integer(BlogViewing::BlogId))
                    .col(timestamp(BlogViewing::ViewedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BLOG_VIEWING_BLOG_ID)
                    .table(BlogViewing::Table)
                    .col(BlogViewing::BlogId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BLOG_VIEWING_BLOG_ID)
                    .from_tbl(BlogViewing::Table)
                    .from_col(BlogViewing::BlogId)
                    .to_tbl(Blog::Table)
                    .to_col(Blog::Id)
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
                    .name(FK_BLOG_VIEWING_BLOG_ID)
                    .table(BlogViewing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BLOG_VIEWING_BLOG_ID)
                    .table(BlogViewing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BlogViewing::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum BlogViewing {
    Table,
    Id,
    BlogId,
    ViewedAt,
}
