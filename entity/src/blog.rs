use std::fmt;

use sea_orm::{entity::prelude::*, QueryFilter, QueryOrder};

use super::sea_orm_active_enums::BlogStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub status: BlogStatus,
    #[sea_orm(indexed)]
    pub author_id: Option<i32>,
    #[sea_orm(default_value = 0)]
    pub view_count: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blogsite_user::Entity",
        from = "Column::AuthorId",
        to = "super::blogsite_user::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Author,
    #[sea_orm(has_many = "super::blog_category::Entity")]
    BlogCategory,
    #[sea_orm(has_many = "super::blog_viewing::Entity")]
    BlogViewing,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::blogsite_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::blog_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogCategory.def()
    }
}

impl Related<super::blog_viewing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogViewing.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::blog_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::blog_category::Relation::Blog.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Blogs currently in `status`, oldest first.
    ///
    /// The predicate is evaluated when the returned query executes, so it always
    /// reflects the persisted status.
    pub fn find_by_status(status: BlogStatus) -> Select<Entity> {
        Self::find()
            .filter(Column::Status.eq(status))
            .order_by_asc(Column::Id)
    }

    pub fn find_active() -> Select<Entity> {
        Self::find_by_status(BlogStatus::Active)
    }

    pub fn find_canceled() -> Select<Entity> {
        Self::find_by_status(BlogStatus::Canceled)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
