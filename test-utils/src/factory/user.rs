//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::{next_id, user_data};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("alice")
///     .groups(["admin", "ops"])
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    groups: Vec<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user_{n}"` where n is auto-incremented
    /// - groups: empty
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            username: format!("user_{}", next_id()),
            groups: Vec::new(),
        }
    }

    /// Sets the username for the user.
    ///
    /// # Arguments
    /// - `username` - Unique login name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the groups for the user.
    ///
    /// # Arguments
    /// - `groups` - Group tags in display order
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            data: ActiveValue::Set(user_data(self.groups)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific username and groups.
///
/// # Arguments
/// - `db` - Database connection
/// - `username` - Unique login name
/// - `groups` - Group tags
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_with_groups(
    db: &DatabaseConnection,
    username: &str,
    groups: &[&str],
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .username(username)
        .groups(groups.iter().copied())
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(user.username.starts_with("user_"));
        assert_eq!(user.data, serde_json::json!({ "groups": [] }));

        Ok(())
    }

    #[tokio::test]
    async fn creates_user_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = UserFactory::new(db)
            .username("alice")
            .groups(["admin", "ops"])
            .build()
            .await?;

        assert_eq!(user.username, "alice");
        assert_eq!(user.data, serde_json::json!({ "groups": ["admin", "ops"] }));

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_user(db).await?;

        assert_ne!(user1.id, user2.id);
        assert_ne!(user1.username, user2.username);

        Ok(())
    }
}
