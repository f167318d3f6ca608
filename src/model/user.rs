use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// A user as exchanged with the API.
///
/// `id` is assigned by the server and never changes; `username` is unique.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    #[serde(default)]
    pub data: UserDataDto,
}

impl UserDto {
    pub fn groups(&self) -> &[String] {
        &self.data.groups
    }
}

/// Free-form user attributes. Only `groups` is interpreted.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UserDataDto {
    /// Authorization tags. Order is kept for display but carries no meaning.
    #[serde(default)]
    pub groups: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateUserDto {
    pub username: String,
    #[serde(default)]
    pub groups: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_user_without_data() {
        let user: UserDto = serde_json::from_str(r#"{"id":3,"username":"c"}"#).unwrap();

        assert_eq!(user.id, 3);
        assert!(user.groups().is_empty());
    }

    #[test]
    fn serializes_groups_under_data() {
        let user = UserDto {
            id: 1,
            username: "a".to_string(),
            data: UserDataDto {
                groups: vec!["admin".to_string()],
            },
        };

        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 1, "username": "a", "data": {"groups": ["admin"]}})
        );
    }
}
