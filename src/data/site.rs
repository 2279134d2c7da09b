use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryOrder,
};

use crate::model::site::SiteInfo;

pub struct SiteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SiteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, info: SiteInfo) -> Result<entity::site::Model, DbErr> {
        let site = entity::site::ActiveModel {
            name: ActiveValue::Set(info.name),
            picture: ActiveValue::Set(info.picture),
            about_us: ActiveValue::Set(info.about_us),
            social: ActiveValue::Set(info.social),
            address: ActiveValue::Set(info.address),
            email: ActiveValue::Set(info.email),
            phone: ActiveValue::Set(info.phone),
            ..Default::default()
        };

        site.insert(self.db).await
    }

    /// Gets the site record in effect, the one with the lowest ID
    pub async fn get_current(&self) -> Result<Option<entity::site::Model>, DbErr> {
        entity::prelude::Site::find()
            .order_by_asc(entity::site::Column::Id)
            .one(self.db)
            .await
    }

    /// Replaces every field of a site record
    ///
    /// Returns `None` if no site exists with the provided ID.
    pub async fn update(
        &self,
        site_id: i32,
        info: SiteInfo,
    ) -> Result<Option<entity::site::Model>, DbErr> {
        let site = match entity::prelude::Site::find_by_id(site_id).one(self.db).await? {
            Some(site) => site,
            None => return Ok(None),
        };

        let mut site_am: entity::site::ActiveModel = site.into();
        site_am.name = ActiveValue::Set(info.name);
        site_am.picture = ActiveValue::Set(info.picture);
        site_am.about_us = ActiveValue::Set(info.about_us);
        site_am.social = ActiveValue::Set(info.social);
        site_am.address = ActiveValue::Set(info.address);
        site_am.email = ActiveValue::Set(info.email);
        site_am.phone = ActiveValue::Set(info.phone);

        let site = site_am.update(self.db).await?;

        Ok(Some(site))
    }

    pub async fn delete(&self, site_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Site::delete_by_id(site_id)
            .exec(self.db)
            .await
    }
}
