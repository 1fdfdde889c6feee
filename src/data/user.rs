use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

use crate::model::{db::UserModel, user::NewUser};

/// Repository for the `user` table.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user, stamping `created_at` with the current UTC time
    ///
    /// Fails with a unique constraint error if the email is already registered.
    pub async fn create(&self, new_user: NewUser) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(new_user.email),
            password: ActiveValue::Set(new_user.password),
            first_name: ActiveValue::Set(new_user.first_name),
            last_name: ActiveValue::Set(new_user.last_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets a user by ID
    pub async fn get(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Gets a user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Updates a user's first & last name
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - The updated user
    /// - `Ok(None)` - No user with the provided ID exists
    pub async fn update_name(
        &self,
        user_id: i32,
        first_name: String,
        last_name: String,
    ) -> Result<Option<UserModel>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id).one(self.db).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.first_name = ActiveValue::Set(first_name);
        user_am.last_name = ActiveValue::Set(last_name);

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Replaces a user's stored password hash
    ///
    /// Returns `Ok(None)` if no user with the provided ID exists.
    pub async fn update_password(
        &self,
        user_id: i32,
        password: String,
    ) -> Result<Option<UserModel>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id).one(self.db).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.password = ActiveValue::Set(password);

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user along with all of their favorites
    ///
    /// Favorites are removed by the `ON DELETE CASCADE` foreign keys. Returns OK
    /// regardless of the user existing, to confirm the deletion result check the
    /// [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
