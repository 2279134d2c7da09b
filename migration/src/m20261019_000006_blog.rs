use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000001_blogsite_user::BlogsiteUser;

static IDX_BLOG_AUTHOR_ID: &str = "idx-blog-author_id";
static IDX_BLOG_STATUS: &str = "idx-blog-status";
static FK_BLOG_AUTHOR_ID: &str = "fk-blog-author_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blog::Table)
                    .if_not_exists()
                    .col(pk_auto(Blog::Id))
                    .col(string(Blog::Title))
                    .col(string_uniq(Blog::Slug))
                    .col(text(Blog::Description))
                    .col(string_len(Blog::Status, 16))
                    .col(integer_null(Blog::AuthorId))
                    .col(integer(Blog::ViewCount).default(0))
                    .col(timestamp(Blog::CreatedAt))
                    .col(timestamp(Blog::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BLOG_AUTHOR_ID)
                    .table(Blog::Table)
                    .col(Blog::AuthorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BLOG_STATUS)
                    .table(Blog::Table)
                    .col(Blog::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BLOG_AUTHOR_ID)
                    .from_tbl(Blog::Table)
                    .from_col(Blog::AuthorId)
                    .to_tbl(BlogsiteUser::Table)
                    .to_col(BlogsiteUser::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BLOG_AUTHOR_ID)
                    .table(Blog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BLOG_STATUS)
                    .table(Blog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BLOG_AUTHOR_ID)
                    .table(Blog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Blog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Blog {
    Table,
    Id,
    Title,
    Slug,
    Description,
    Status,
    AuthorId,
    ViewCount,
    CreatedAt,
    UpdatedAt,
}
