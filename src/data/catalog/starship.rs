use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::{
    catalog::NewStarship,
    db::{StarshipModel, UserModel},
};

/// Repository for the `starship` table.
pub struct StarshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarshipRepository<'a, C> {
    /// Creates a new instance of [`StarshipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new starship
    pub async fn create(&self, new_starship: NewStarship) -> Result<StarshipModel, DbErr> {
        let starship = entity::starship::ActiveModel {
            name: ActiveValue::Set(new_starship.name),
            model: ActiveValue::Set(new_starship.model),
            manufacturer: ActiveValue::Set(new_starship.manufacturer),
            crew: ActiveValue::Set(new_starship.crew),
            ..Default::default()
        };

        starship.insert(self.db).await
    }

    /// Gets a starship by ID
    pub async fn get(&self, starship_id: i32) -> Result<Option<StarshipModel>, DbErr> {
        entity::prelude::Starship::find_by_id(starship_id)
            .one(self.db)
            .await
    }

    /// Gets every starship ordered by ID
    pub async fn get_all(&self) -> Result<Vec<StarshipModel>, DbErr> {
        entity::prelude::Starship::find()
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every column of a starship
    ///
    /// Returns `Ok(None)` if no starship with the provided ID exists.
    pub async fn update(
        &self,
        starship_id: i32,
        new_starship: NewStarship,
    ) -> Result<Option<StarshipModel>, DbErr> {
        let starship = match entity::prelude::Starship::find_by_id(starship_id)
            .one(self.db)
            .await?
        {
            Some(starship) => starship,
            None => return Ok(None),
        };

        let mut starship_am = starship.into_active_model();
        starship_am.name = ActiveValue::Set(new_starship.name);
        starship_am.model = ActiveValue::Set(new_starship.model);
        starship_am.manufacturer = ActiveValue::Set(new_starship.manufacturer);
        starship_am.crew = ActiveValue::Set(new_starship.crew);

        let starship = starship_am.update(self.db).await?;

        Ok(Some(starship))
    }

    /// Deletes a starship
    ///
    /// Fails with a foreign key error while any user still has the starship favorited.
    pub async fn delete(&self, starship_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Starship::delete_by_id(starship_id)
            .exec(self.db)
            .await
    }

    /// Gets every user who has favorited the starship
    pub async fn get_favorited_by(&self, starship_id: i32) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .inner_join(entity::favorite_starship::Entity)
            .filter(entity::favorite_starship::Column::StarshipId.eq(starship_id))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }
}
