use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000001_blogsite_user::BlogsiteUser;

static IDX_MESSAGE_AUTHOR_ID: &str = "idx-message-author_id";
static FK_MESSAGE_AUTHOR_ID: &str = "fk-message-author_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Message::Table)
                    .if_not_exists()
                    .col(pk_auto(Message::Id))
                    .col(integer(Message::AuthorId))
                    .col(string(Message::Subject))
                    .col(text(Message::Body))
                    .col(boolean(Message::Status).default(false))
                    .col(timestamp(Message::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MESSAGE_AUTHOR_ID)
                    .table(Message::Table)
                    .col(Message::AuthorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MESSAGE_AUTHOR_ID)
                    .from_tbl(Message::Table)
                    .from_col(Message::AuthorId)
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
                    .name(FK_MESSAGE_AUTHOR_ID)
                    .table(Message::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MESSAGE_AUTHOR_ID)
                    .table(Message::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Message::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Message {
    Table,
    Id,
    AuthorId,
    Subject,
    Body,
    Status,
    CreatedAt,
}
