//! User service for business logic.
//!
//! `UserService` validates requests, enforces username uniqueness and the self-delete
//! rule, and translates missing rows into `NotFound` errors.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, UpdateUserParam, User},
};

/// Group granted to the account seeded from `ADMIN_USERNAME`.
pub const ADMIN_GROUP: &str = "admin";

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user ordered by id.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        Ok(users)
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_username(username)
            .await?;
        Ok(user)
    }

    /// Creates a user after validating the username.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Username is empty after trimming
    /// - `Err(AppError::Conflict)` - Username is already taken
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        validate_username(&param.username)?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_username(&param.username).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "User {} already exists",
                param.username
            )));
        }

        let username = param.username.clone();
        let user = user_repo
            .create(param)
            .await
            .map_err(|err| conflict_on_duplicate(err, &username))?;
        tracing::info!("Created user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Replaces a user's username and groups.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::BadRequest)` - Username is empty after trimming
    /// - `Err(AppError::NotFound)` - No user with the given id
    /// - `Err(AppError::Conflict)` - Another user already has the new username
    /// - `Err(AppError::DbErr)` - Database error during lookup or update
    pub async fn update(&self, param: UpdateUserParam) -> Result<User, AppError> {
        validate_username(&param.username)?;

        let user_repo = UserRepository::new(self.db);
        if let Some(other) = user_repo.find_by_username(&param.username).await? {
            if other.id != param.id {
                return Err(AppError::Conflict(format!(
                    "Username {} is already taken",
                    param.username
                )));
            }
        }

        let id = param.id;
        let username = param.username.clone();
        let user = user_repo
            .update(param)
            .await
            .map_err(|err| conflict_on_duplicate(err, &username))?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

        Ok(user)
    }

    /// Deletes a user on behalf of `acting_username`.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with the given id
    /// - `Err(AppError::BadRequest)` - The user is the requesting account
    /// - `Err(AppError::DbErr)` - Database error during lookup or delete
    pub async fn delete(&self, id: i32, acting_username: Option<&str>) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

        if acting_username == Some(user.username.as_str()) {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        user_repo.delete(id).await?;
        tracing::info!("Deleted user {} ({})", user.username, user.id);

        Ok(())
    }

    /// Creates `username` with the admin group unless the account already exists.
    ///
    /// An existing account is left untouched so groups edited through the UI survive
    /// restarts. Returns whether a user was created.
    pub async fn ensure_admin(&self, username: &str) -> Result<bool, AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Ok(false);
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_username(username).await?.is_some() {
            return Ok(false);
        }

        user_repo
            .create(CreateUserParam {
                username: username.to_string(),
                groups: vec![ADMIN_GROUP.to_string()],
            })
            .await?;

        Ok(true)
    }
}

/// Turns a UNIQUE violation on `username` into a conflict.
///
/// A concurrent request can claim the name between the lookup and the write, in which
/// case the constraint is what rejects the second one.
fn conflict_on_duplicate(err: DbErr, username: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict(format!("User {} already exists", username))
        }
        _ => AppError::DbErr(err),
    }
}

fn validate_username(username: &str) -> Result<(), AppError> {
    if username.trim().is_empty() {
        return Err(AppError::BadRequest("Username must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn create_param(username: &str, groups: &[&str]) -> CreateUserParam {
        CreateUserParam {
            username: username.to_string(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn create_rejects_blank_username() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = UserService::new(db).create(create_param("", &[])).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(UserService::new(db).get_all().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn create_reports_conflict_for_taken_username() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_user_with_groups(db, "alice", &[]).await?;

        let result = UserService::new(db)
            .create(create_param("alice", &["ops"]))
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));

        Ok(())
    }

    #[tokio::test]
    async fn create_persists_groups() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = UserService::new(db);
        let user = service.create(create_param("bob", &["staff"])).await?;

        let users = service.get_all().await?;
        assert_eq!(users, vec![user]);
        assert_eq!(users[0].groups, vec!["staff"]);

        Ok(())
    }

    /// Groups are accepted as any string sequence, including blanks and repeats.
    #[tokio::test]
    async fn create_stores_groups_verbatim() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = UserService::new(db);
        let created = service
            .create(CreateUserParam::from_dto(crate::model::user::CreateUserDto {
                username: "x".to_string(),
                groups: vec![" a".to_string(), "a".to_string(), "".to_string()],
            }))
            .await?;

        let stored = service.get_by_username("x").await?.unwrap();
        assert_eq!(created.groups, vec![" a", "a", ""]);
        assert_eq!(stored.groups, vec![" a", "a", ""]);

        Ok(())
    }

    #[tokio::test]
    async fn update_stores_groups_verbatim() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let bob = factory::create_user_with_groups(db, "bob", &[]).await?;

        let user = UserService::new(db)
            .update(UpdateUserParam {
                id: bob.id,
                username: "bob".to_string(),
                groups: vec!["ops".to_string(), "ops".to_string(), " ".to_string()],
            })
            .await?;

        assert_eq!(user.groups, vec!["ops", "ops", " "]);

        Ok(())
    }

    #[tokio::test]
    async fn unique_violation_maps_to_conflict() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_user_with_groups(db, "alice", &[]).await?;

        let err = UserRepository::new(db)
            .create(create_param("alice", &[]))
            .await
            .unwrap_err();

        assert!(matches!(
            conflict_on_duplicate(err, "alice"),
            AppError::Conflict(_)
        ));

        Ok(())
    }

    #[test]
    fn other_database_errors_stay_internal() {
        let err = conflict_on_duplicate(DbErr::Custom("boom".to_string()), "alice");

        assert!(matches!(err, AppError::DbErr(_)));
    }

    /// Two simultaneous creates of one username: one succeeds, the other is a conflict.
    #[tokio::test]
    async fn concurrent_creates_report_conflict() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = UserService::new(db);
        let second = UserService::new(db);
        let (a, b) = tokio::join!(
            first.create(create_param("dup", &[])),
            second.create(create_param("dup", &[]))
        );

        let results = [a, b];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .any(|r| matches!(r, Err(AppError::Conflict(_)))));
        assert_eq!(first.get_all().await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn update_returns_not_found_for_unknown_id() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = UserService::new(db)
            .update(UpdateUserParam {
                id: 5,
                username: "ghost".to_string(),
                groups: Vec::new(),
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_username_of_other_user() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_user_with_groups(db, "alice", &[]).await?;
        let bob = factory::create_user_with_groups(db, "bob", &[]).await?;

        let result = UserService::new(db)
            .update(UpdateUserParam {
                id: bob.id,
                username: "alice".to_string(),
                groups: Vec::new(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));

        Ok(())
    }

    /// Keeping the same username while changing groups is not a conflict.
    #[tokio::test]
    async fn update_allows_unchanged_username() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let bob = factory::create_user_with_groups(db, "bob", &["guest"]).await?;

        let user = UserService::new(db)
            .update(UpdateUserParam {
                id: bob.id,
                username: "bob".to_string(),
                groups: vec!["staff".to_string(), "ops".to_string()],
            })
            .await?;

        assert_eq!(user.groups, vec!["staff", "ops"]);

        Ok(())
    }

    #[tokio::test]
    async fn delete_refuses_own_account() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let alice = factory::create_user_with_groups(db, "alice", &["admin"]).await?;

        let service = UserService::new(db);
        let result = service.delete(alice.id, Some("alice")).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(service.get_all().await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_other_account() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let bob = factory::create_user_with_groups(db, "bob", &[]).await?;

        let service = UserService::new(db);
        service.delete(bob.id, Some("alice")).await?;

        assert!(service.get_all().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn delete_returns_not_found_for_unknown_id() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = UserService::new(db).delete(12, None).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn ensure_admin_seeds_once() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = UserService::new(db);

        assert!(service.ensure_admin("root").await?);
        assert!(!service.ensure_admin("root").await?);

        let users = service.get_all().await?;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "root");
        assert!(users[0].is_member_of(ADMIN_GROUP));

        Ok(())
    }

    #[tokio::test]
    async fn ensure_admin_keeps_existing_groups() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_user_with_groups(db, "root", &["ops"]).await?;

        let service = UserService::new(db);

        assert!(!service.ensure_admin("root").await?);
        let root = service.get_by_username("root").await?.unwrap();
        assert_eq!(root.groups, vec!["ops"]);

        Ok(())
    }

    #[tokio::test]
    async fn ensure_admin_ignores_blank_username() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = UserService::new(db);

        assert!(!service.ensure_admin("  ").await?);
        assert!(service.get_all().await?.is_empty());

        Ok(())
    }
}
