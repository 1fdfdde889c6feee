use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

/// Password stored for every mock user.
pub static TEST_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$dGVzdA$dGVzdA";

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with the provided email and standard test values for every
    /// other column.
    pub async fn insert_mock_user(&self, email: &str) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
                first_name: ActiveValue::Set("Test".to_string()),
                last_name: ActiveValue::Set("User".to_string()),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a user who has favorited one character, one planet and one starship.
    ///
    /// The catalog items are created as well.
    ///
    /// # Returns
    /// The user followed by the character, planet and starship favorite links
    pub async fn insert_mock_user_with_favorites(
        &self,
        email: &str,
    ) -> Result<
        (
            UserModel,
            entity::favorite_character::Model,
            entity::favorite_planet::Model,
            entity::favorite_starship::Model,
        ),
        TestError,
    > {
        let user = self.insert_mock_user(email).await?;

        let character = self.setup.catalog().insert_mock_character("Luke Skywalker").await?;
        let planet = self.setup.catalog().insert_mock_planet("Tatooine").await?;
        let starship = self.setup.catalog().insert_mock_starship("X-wing").await?;

        let favorites = self.setup.favorite();
        let favorite_character = favorites
            .insert_favorite_character(user.id, character.id)
            .await?;
        let favorite_planet = favorites.insert_favorite_planet(user.id, planet.id).await?;
        let favorite_starship = favorites
            .insert_favorite_starship(user.id, starship.id)
            .await?;

        Ok((user, favorite_character, favorite_planet, favorite_starship))
    }
}
