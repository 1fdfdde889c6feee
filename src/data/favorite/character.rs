use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::db::{CharacterModel, FavoriteCharacterModel};

/// Repository for the `favorite_character` table.
pub struct FavoriteCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteCharacterRepository<'a, C> {
    /// Creates a new instance of [`FavoriteCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a character to a user's favorites
    ///
    /// # Arguments
    /// - `user_id` (`i32`): ID of the user entry in the database
    /// - `character_id` (`i32`): ID of the character entry in the database
    pub async fn create(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, DbErr> {
        let favorite = entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Gets a favorite link by ID
    pub async fn get(&self, favorite_id: i32) -> Result<Option<FavoriteCharacterModel>, DbErr> {
        entity::prelude::FavoriteCharacter::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    /// Gets all favorite character links for the provided user ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<FavoriteCharacterModel>, DbErr> {
        entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_character::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the characters a user has favorited, in the order they were favorited
    pub async fn get_characters_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .inner_join(entity::favorite_character::Entity)
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_character::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a favorite link by ID
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteCharacter::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    /// Deletes every link between the user and the character
    pub async fn delete_by_user_and_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteCharacter::delete_many()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .filter(entity::favorite_character::Column::CharacterId.eq(character_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use holocron_test_utils::prelude::*;
        use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

        use crate::{
            data::favorite::character::FavoriteCharacterRepository, error::ConstraintViolation,
        };

        /// Expect success when linking an existing user and character
        #[tokio::test]
        async fn creates_favorite_character() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_favorite_tables()
                .with_mock_user("a@x.com")
                .with_mock_character("Luke")
                .build()
                .await?;

            let favorite_repo = FavoriteCharacterRepository::new(&test.db);
            let favorite = favorite_repo.create(1, 1).await?;

            assert_eq!(favorite.user_id, 1);
            assert_eq!(favorite.character_id, 1);

            Ok(())
        }

        /// Expect a foreign key violation when the user does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_user() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_favorite_tables()
                .with_mock_character("Luke")
                .build()
                .await?;

            // Don't create a user first, this will cause a foreign key error
            let favorite_repo = FavoriteCharacterRepository::new(&test.db);
            let result = favorite_repo.create(1, 1).await;

            assert!(matches!(
                result.as_ref().map_err(ConstraintViolation::from_db_err),
                Err(Some(ConstraintViolation::ForeignKey(_)))
            ));

            Ok(())
        }

        /// Expect a foreign key violation when the character does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_character() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_favorite_tables()
                .with_mock_user("a@x.com")
                .build()
                .await?;

            let favorite_repo = FavoriteCharacterRepository::new(&test.db);
            let result = favorite_repo.create(1, 42).await;

            assert!(matches!(
                result.as_ref().map_err(ConstraintViolation::from_db_err),
                Err(Some(ConstraintViolation::ForeignKey(_)))
            ));

            // Nothing was written
            let links = entity::prelude::FavoriteCharacter::find()
                .filter(entity::favorite_character::Column::UserId.eq(1))
                .all(&test.db)
                .await?;
            assert!(links.is_empty());

            Ok(())
        }
    }

    mod get {
        use holocron_test_utils::prelude::*;

        use crate::data::favorite::character::FavoriteCharacterRepository;

        /// Expect only the user's own links
        #[tokio::test]
        async fn gets_links_for_user() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_favorite_tables()
                .with_mock_user("a@x.com")
                .with_mock_user("b@x.com")
                .with_mock_character("Luke Skywalker")
                .with_mock_character("Leia Organa")
                .build()
                .await?;
            test.favorite().insert_favorite_character(1, 2).await?;
            test.favorite().insert_favorite_character(2, 1).await?;
            test.favorite().insert_favorite_character(1, 1).await?;

            let favorite_repo = FavoriteCharacterRepository::new(&test.db);
            let links = favorite_repo.get_many_by_user_id(1).await?;

            let character_ids: Vec<i32> = links.iter().map(|l| l.character_id).collect();
            assert_eq!(character_ids, vec![2, 1]);

            Ok(())
        }

        /// Expect the favorited characters themselves in favorite order
        #[tokio::test]
        async fn gets_characters_for_user() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_favorite_tables()
                .with_mock_user("a@x.com")
                .with_mock_character("Luke Skywalker")
                .with_mock_character("Leia Organa")
                .with_mock_character("Han Solo")
                .build()
                .await?;
            test.favorite().insert_favorite_character(1, 3).await?;
            test.favorite().insert_favorite_character(1, 1).await?;

            let favorite_repo = FavoriteCharacterRepository::new(&test.db);
            let characters = favorite_repo.get_characters_by_user_id(1).await?;

            let names: Vec<&str> = characters.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names, vec!["Han Solo", "Luke Skywalker"]);

            Ok(())
        }

        /// Expect no rows for a user without favorites
        #[tokio::test]
        async fn returns_empty_for_user_without_favorites() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_favorite_tables()
                .with_mock_user("a@x.com")
                .build()
                .await?;

            let favorite_repo = FavoriteCharacterRepository::new(&test.db);

            assert!(favorite_repo.get_many_by_user_id(1).await?.is_empty());
            assert!(favorite_repo.get_characters_by_user_id(1).await?.is_empty());

            Ok(())
        }
    }

    mod delete {
        use holocron_test_utils::prelude::*;

        use crate::data::favorite::character::FavoriteCharacterRepository;

        /// Expect the link to be removed and both ends kept
        #[tokio::test]
        async fn deletes_link() -> Result<(), TestError> {
            let test = TestBuilder::new().with_favorite_tables().build().await?;
            let (user, favorite, _, _) = test
                .user()
                .insert_mock_user_with_favorites("a@x.com")
                .await?;

            let favorite_repo = FavoriteCharacterRepository::new(&test.db);
            let result = favorite_repo.delete(favorite.id).await?;

            assert_eq!(result.rows_affected, 1);
            assert!(favorite_repo.get(favorite.id).await?.is_none());
            assert!(favorite_repo.get_many_by_user_id(user.id).await?.is_empty());

            Ok(())
        }

        /// Expect only the matching user & character link to be removed
        #[tokio::test]
        async fn deletes_by_user_and_character() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_favorite_tables()
                .with_mock_user("a@x.com")
                .with_mock_user("b@x.com")
                .with_mock_character("Luke Skywalker")
                .build()
                .await?;
            test.favorite().insert_favorite_character(1, 1).await?;
            test.favorite().insert_favorite_character(2, 1).await?;

            let favorite_repo = FavoriteCharacterRepository::new(&test.db);
            let result = favorite_repo.delete_by_user_and_character(1, 1).await?;

            assert_eq!(result.rows_affected, 1);
            assert!(favorite_repo.get_many_by_user_id(1).await?.is_empty());
            assert_eq!(favorite_repo.get_many_by_user_id(2).await?.len(), 1);

            Ok(())
        }
    }
}
