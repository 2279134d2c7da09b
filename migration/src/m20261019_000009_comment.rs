use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261019_000001_blogsite_user::BlogsiteUser, m20261019_000006_blog::Blog};

static IDX_COMMENT_BLOG_ID: &str = "idx-comment-blog_id";
static FK_COMMENT_BLOG_ID: &str = "fk-comment-blog_id";
static FK_COMMENT_AUTHOR_ID: &str = "fk-comment-author_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(pk_auto(Comment::Id))
                    .col(integer(Comment::BlogId))
                    .col(integer(Comment::AuthorId))
                    .col(text(Comment::Body))
                    .col(timestamp(Comment::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMMENT_BLOG_ID)
                    .table(Comment::Table)
                    .col(Comment::BlogId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMMENT_BLOG_ID)
                    .from_tbl(Comment::Table)
                    .from_col(Comment::BlogId)
                    .to_tbl(Blog::Table)
                    .to_col(Blog::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMMENT_AUTHOR_ID)
                    .from_tbl(Comment::Table)
                    .from_col(Comment::AuthorId)
                    .to_tbl(BlogsiteUser::Table)
                    .to_col(BlogsiteUser::Id)
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
                    .name(FK_COMMENT_AUTHOR_ID)
                    .table(Comment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COMMENT_BLOG_ID)
                    .table(Comment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMMENT_BLOG_ID)
                    .table(Comment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Comment {
    Table,
    Id,
    BlogId,
    AuthorId,
    Body,
    CreatedAt,
}
