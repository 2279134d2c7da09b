use entity::sea_orm_active_enums::BlogStatus;
use serde::{Deserialize, Serialize};

/// Input for creating a blog. The slug is derived from `title`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewBlog {
    pub title: String,
    pub description: String,
    pub status: BlogStatus,
    pub author_id: Option<i32>,
    /// Categories to tag the blog with; each must exist
    #[serde(default)]
    pub category_ids: Vec<i32>,
}

impl NewBlog {
    pub fn new(title: impl Into<String>, description: impl Into<String>, status: BlogStatus) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status,
            author_id: None,
            category_ids: Vec::new(),
        }
    }

    pub fn author(mut self, author_id: i32) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn category(mut self, category_id: i32) -> Self {
        self.category_ids.push(category_id);
        self
    }
}
