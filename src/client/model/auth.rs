use crate::{client::model::error::ApiError, model::user::UserDto};

/// Who the browser session is acting as.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthState {
    /// Initial state - haven't asked the server yet
    #[default]
    Initializing,
    /// The fronting proxy identified a known account
    Authenticated(UserDto),
    /// No identity header, or no account with that name
    Anonymous,
    /// Failed to ask the server
    Error(ApiError),
}

impl From<Option<UserDto>> for AuthState {
    fn from(opt: Option<UserDto>) -> Self {
        match opt {
            Some(user) => AuthState::Authenticated(user),
            None => AuthState::Anonymous,
        }
    }
}

impl AuthState {
    /// Get the authenticated user, if any
    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.user().map(|u| u.username.as_str())
    }
}
