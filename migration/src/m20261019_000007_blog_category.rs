use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261019_000004_category::Category, m20261019_000006_blog::Blog};

static FK_BLOG_CATEGORY_BLOG_ID: &str = "fk-blog_category-blog_id";
static FK_BLOG_CATEGORY_CATEGORY_ID: &str = "fk-blog_category-category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogCategory::Table)
                    .if_not_exists()
                    .col(integer(BlogCategory::BlogId))
                    .col(integer(BlogCategory::CategoryId))
                    .primary_key(
                        Index::create()
                            .col(BlogCategory::BlogId)
                            .col(BlogCategory::CategoryId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BLOG_CATEGORY_BLOG_ID)
                    .from_tbl(BlogCategory::Table)
                    .from_col(BlogCategory::BlogId)
                    .to_tbl(Blog::Table)
                    .to_col(Blog::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BLOG_CATEGORY_CATEGORY_ID)
                    .from_tbl(BlogCategory::Table)
                    .from_col(BlogCategory::CategoryId)
                    .to_tbl(Category::Table)
                    .to_col(Category::Id)
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
                    .name(FK_BLOG_CATEGORY_CATEGORY_ID)
                    .table(BlogCategory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BLOG_CATEGORY_BLOG_ID)
                    .table(BlogCategory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BlogCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum BlogCategory {
    Table,
    BlogId,
    CategoryId,
}
