//! User data repository for database operations.
//!
//! Provides the `UserRepository` for managing rows of the `user` table. The groups of a
//! user live in the JSON `data` column and are converted to and from the domain model
//! at this boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::user::{groups_to_data, CreateUserParam, UpdateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every user ordered by id, i.e. creation order.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by exact username.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Inserts a new user.
    ///
    /// The username column is unique, so inserting a taken username fails with a
    /// constraint violation `DbErr`. Callers check availability first to report a
    /// conflict instead.
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            data: ActiveValue::Set(groups_to_data(&param.groups)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Replaces the username and groups of an existing user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with the given id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateUserParam) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();
        active.username = ActiveValue::Set(param.username);
        active.data = ActiveValue::Set(groups_to_data(&param.groups));

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes a user by id.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No user with the given id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
