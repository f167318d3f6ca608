//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::{CreateUserDto, UserDataDto, UserDto};

/// Account in the roster together with the groups it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Group names in the order they were assigned.
    pub groups: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            data: UserDataDto {
                groups: self.groups,
            },
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The `data` column is free-form JSON. A document without a readable `groups`
    /// array is treated as a user without groups rather than a failed row.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let data: UserDataDto = serde_json::from_value(entity.data).unwrap_or_default();

        Self {
            id: entity.id,
            username: entity.username,
            groups: data.groups,
            created_at: entity.created_at,
        }
    }

    pub fn is_member_of(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }
}

/// Serializes groups into the JSON document stored in the `data` column.
pub fn groups_to_data(groups: &[String]) -> serde_json::Value {
    serde_json::json!({ "groups": groups })
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    /// Username with surrounding whitespace removed.
    pub username: String,
    /// Stored exactly as sent; tidying group tags is left to the editor.
    pub groups: Vec<String>,
}

impl CreateUserParam {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            groups: dto.groups,
        }
    }
}

/// Parameters for replacing a user's username and groups.
#[derive(Debug, Clone)]
pub struct UpdateUserParam {
    pub id: i32,
    pub username: String,
    pub groups: Vec<String>,
}

impl UpdateUserParam {
    /// Builds update parameters; the id comes from the path, not the body.
    pub fn from_dto(id: i32, dto: UserDto) -> Self {
        Self {
            id,
            username: dto.username.trim().to_string(),
            groups: dto.data.groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_groups_from_entity_data() {
        let entity = test_utils::fixture::user::entity_builder()
            .groups(["admin", "staff"])
            .build();

        let user = User::from_entity(entity);

        assert_eq!(user.groups, vec!["admin", "staff"]);
        assert!(user.is_member_of("admin"));
        assert!(!user.is_member_of("guest"));
    }

    #[test]
    fn malformed_data_yields_no_groups() {
        let entity = test_utils::fixture::user::entity_builder()
            .data(serde_json::json!({ "groups": "admin" }))
            .build();

        let user = User::from_entity(entity);

        assert!(user.groups.is_empty());
    }

    #[test]
    fn create_param_trims_username_but_keeps_groups_verbatim() {
        let param = CreateUserParam::from_dto(CreateUserDto {
            username: "  alice ".to_string(),
            groups: vec![
                "staff".to_string(),
                " ".to_string(),
                " staff ".to_string(),
                "ops".to_string(),
            ],
        });

        assert_eq!(param.username, "alice");
        assert_eq!(param.groups, vec!["staff", " ", " staff ", "ops"]);
    }

    #[test]
    fn into_dto_nests_groups_under_data() {
        let user = User::from_entity(
            test_utils::fixture::user::entity_builder()
                .id(7)
                .username("bob")
                .groups(["ops"])
                .build(),
        );

        let dto = user.into_dto();

        assert_eq!(dto.id, 7);
        assert_eq!(dto.username, "bob");
        assert_eq!(dto.groups(), ["ops".to_string()]);
    }
}
