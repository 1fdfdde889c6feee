//! Referential integrity across the favorite link tables.

use holocron::{
    error::{ConstraintViolation, Error},
    service::{catalog::CatalogService, favorite::FavoriteService, user::UserService},
};
use holocron_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that deleting one of several users removes exactly that user's favorites.
///
/// Expected: the remaining user keeps all three favorite links
#[tokio::test]
async fn deleting_user_removes_only_their_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;
    let (luke, _, _, _) = test
        .user()
        .insert_mock_user_with_favorites("luke@rebellion.org")
        .await?;
    let (leia, _, _, _) = test
        .user()
        .insert_mock_user_with_favorites("leia@rebellion.org")
        .await?;

    let user_service = UserService::new(&test.db);
    assert!(user_service.delete_user(luke.id).await.unwrap());

    let favorites = user_service
        .get_favorites(leia.id)
        .await
        .unwrap()
        .expect("leia still exists");
    assert_eq!(favorites.characters.len(), 1);
    assert_eq!(favorites.planets.len(), 1);
    assert_eq!(favorites.starships.len(), 1);

    assert_eq!(
        entity::prelude::FavoriteCharacter::find().count(&test.db).await?,
        1
    );
    assert_eq!(
        entity::prelude::FavoritePlanet::find().count(&test.db).await?,
        1
    );
    assert_eq!(
        entity::prelude::FavoriteStarship::find().count(&test.db).await?,
        1
    );

    Ok(())
}

/// Tests that a catalog item can be deleted once its last favorite is removed.
///
/// Expected: delete fails while favorited, then succeeds
#[tokio::test]
async fn catalog_item_deletable_after_unfavorite() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;
    let (user, favorite, _, _) = test
        .user()
        .insert_mock_user_with_favorites("a@x.com")
        .await?;

    let catalog_service = CatalogService::new(&test.db);
    let favorite_service = FavoriteService::new(&test.db);

    let blocked = catalog_service
        .delete_character(favorite.character_id)
        .await;
    assert!(matches!(
        blocked,
        Err(Error::Constraint(ConstraintViolation::ForeignKey(_)))
    ));

    assert!(favorite_service
        .remove_character(user.id, favorite.character_id)
        .await
        .unwrap());
    assert!(catalog_service
        .delete_character(favorite.character_id)
        .await
        .unwrap());

    Ok(())
}

/// Tests that a missing required column is reported as a not-null violation.
///
/// Expected: Error::Constraint(ConstraintViolation::NotNull)
#[tokio::test]
async fn missing_required_column_is_not_null_violation() -> Result<(), TestError> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new().with_favorite_tables().build().await?;

    let user = entity::user::ActiveModel {
        password: ActiveValue::Set("h".to_string()),
        first_name: ActiveValue::Set("A".to_string()),
        last_name: ActiveValue::Set("B".to_string()),
        created_at: ActiveValue::Set(chrono::Utc::now()),
        ..Default::default()
    };
    let result = user.insert(&test.db).await.map_err(Error::from);

    assert!(matches!(
        result,
        Err(Error::Constraint(ConstraintViolation::NotNull(_)))
    ));

    Ok(())
}
