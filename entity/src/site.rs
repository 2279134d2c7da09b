use std::fmt;

use sea_orm::entity::prelude::*;

/// Organizational metadata shown across the site (about page, footer contacts).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "site")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub picture: String,
    #[sea_orm(column_type = "Text")]
    pub about_us: String,
    /// Social network name to profile URL, e.g. `{"twitter": "https://..."}`
    pub social: Json,
    pub address: String,
    pub email: String,
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
