//! End-to-end walk through the favorites schema.
//!
//! A user favorites a character, is serialized for external exposure and is then
//! deleted, taking the favorite with them.

use holocron::{
    data::{
        catalog::character::CharacterRepository, favorite::character::FavoriteCharacterRepository,
        user::UserRepository,
    },
    model::{catalog::NewCharacter, user::NewUser, user::UserDto},
};
use holocron_test_utils::prelude::*;
use serde_json::json;

/// Tests the create, serialize & delete lifecycle of a user with a favorite.
///
/// Expected: the user serializes as `{"id": 1, "email": "a@x.com"}` and no
/// favorite rows remain for the user ID after deletion
#[tokio::test]
async fn favorite_character_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;

    let user_repo = UserRepository::new(&test.db);
    let character_repo = CharacterRepository::new(&test.db);
    let favorite_repo = FavoriteCharacterRepository::new(&test.db);

    let user = user_repo
        .create(NewUser {
            email: "a@x.com".to_string(),
            password: "h".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
        })
        .await?;
    let character = character_repo
        .create(NewCharacter {
            name: "Luke".to_string(),
            gender: "male".to_string(),
            species: "Human".to_string(),
        })
        .await?;
    favorite_repo.create(user.id, character.id).await?;

    let serialized = serde_json::to_value(UserDto::from(&user)).unwrap();
    assert_eq!(serialized, json!({"id": 1, "email": "a@x.com"}));

    let old_user_id = user.id;
    user_repo.delete(old_user_id).await?;

    assert!(favorite_repo.get_many_by_user_id(old_user_id).await?.is_empty());
    assert!(user_repo.get(old_user_id).await?.is_none());

    // The catalog side of the link is reference data and survives
    assert!(character_repo.get(character.id).await?.is_some());
    assert!(character_repo.get_favorited_by(character.id).await?.is_empty());

    Ok(())
}

/// Tests that the serialized user never carries the password, whatever it holds.
///
/// Expected: only `id` & `email` keys
#[tokio::test]
async fn serialized_user_omits_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;

    let user_repo = UserRepository::new(&test.db);
    let user = user_repo
        .create(NewUser {
            email: "vader@empire.gov".to_string(),
            password: "\"email\": \"leak\"".to_string(),
            first_name: "Anakin".to_string(),
            last_name: "Skywalker".to_string(),
        })
        .await?;

    let serialized = serde_json::to_string(&UserDto::from(user)).unwrap();

    assert_eq!(serialized, r#"{"id":1,"email":"vader@empire.gov"}"#);

    Ok(())
}
