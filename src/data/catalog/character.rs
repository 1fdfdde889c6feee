use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::{
    catalog::NewCharacter,
    db::{CharacterModel, UserModel},
};

/// Repository for the `character` table.
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new character
    pub async fn create(&self, new_character: NewCharacter) -> Result<CharacterModel, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(new_character.name),
            gender: ActiveValue::Set(new_character.gender),
            species: ActiveValue::Set(new_character.species),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Gets a character by ID
    pub async fn get(&self, character_id: i32) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Gets every character ordered by ID
    pub async fn get_all(&self) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every column of a character
    ///
    /// Returns `Ok(None)` if no character with the provided ID exists.
    pub async fn update(
        &self,
        character_id: i32,
        new_character: NewCharacter,
    ) -> Result<Option<CharacterModel>, DbErr> {
        let character = match entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?
        {
            Some(character) => character,
            None => return Ok(None),
        };

        let mut character_am = character.into_active_model();
        character_am.name = ActiveValue::Set(new_character.name);
        character_am.gender = ActiveValue::Set(new_character.gender);
        character_am.species = ActiveValue::Set(new_character.species);

        let character = character_am.update(self.db).await?;

        Ok(Some(character))
    }

    /// Deletes a character
    ///
    /// Fails with a foreign key error while any user still has the character favorited.
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }

    /// Gets every user who has favorited the character
    pub async fn get_favorited_by(&self, character_id: i32) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .inner_join(entity::favorite_character::Entity)
            .filter(entity::favorite_character::Column::CharacterId.eq(character_id))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }
}
