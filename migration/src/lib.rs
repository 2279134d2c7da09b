pub use sea_orm_migration::prelude::*;

mod m20261019_000001_blogsite_user;
mod m20261019_000002_region;
mod m20261019_000003_district;
mod m20261019_000004_category;
mod m20261019_000005_site;
mod m20261019_000006_blog;
mod m20261019_000007_blog_category;
mod m20261019_000008_blog_viewing;
mod m20261019_000009_comment;
mod m20261019_000010_message;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_blogsite_user::Migration),
            Box::new(m20261019_000002_region::Migration),
            Box::new(m20261019_000003_district::Migration),
            Box::new(m20261019_000004_category::Migration),
            Box::new(m20261019_000005_site::Migration),
            Box::new(m20261019_000006_blog::Migration),
            Box::new(m20261019_000007_blog_category::Migration),
            Box::new(m20261019_000008_blog_viewing::Migration),
            Box::new(m20261019_000009_comment::Migration),
            Box::new(m20261019_000010_message::Migration),
        ]
    }
}
