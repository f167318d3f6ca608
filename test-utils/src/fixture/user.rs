//! User fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::user;

use crate::factory::helpers::user_data;

/// Default test user ID.
pub const DEFAULT_ID: i32 = 1;

/// Default test username.
pub const DEFAULT_USERNAME: &str = "testuser";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - username: `"testuser"`
/// - data: `{"groups": []}`
/// - created_at: Unix epoch
///
/// # Returns
/// - `user::Model` - In-memory user entity
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a builder for customizing a user entity model.
///
/// # Returns
/// - `UserEntityBuilder` - Builder seeded with the default values
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder {
        id: DEFAULT_ID,
        username: DEFAULT_USERNAME.to_string(),
        data: user_data(Vec::<String>::new()),
        created_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

/// Builder for user entity models that are never inserted.
pub struct UserEntityBuilder {
    id: i32,
    username: String,
    data: serde_json::Value,
    created_at: DateTime<Utc>,
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data = user_data(groups);
        self
    }

    /// Overrides the raw JSON document, for testing malformed rows.
    pub fn data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    pub fn build(self) -> user::Model {
        user::Model {
            id: self.id,
            username: self.username,
            data: self.data,
            created_at: self.created_at,
        }
    }
}
