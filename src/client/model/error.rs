use thiserror::Error;

/// Status used for requests that never produced an HTTP response.
pub const NETWORK_ERROR_STATUS: u64 = 0;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl ApiError {
    /// The request could not be sent or no response arrived.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: NETWORK_ERROR_STATUS,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Failures of user list operations.
///
/// The first group are preconditions checked locally before any request is sent;
/// the rest classify a failed request.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum RosterError {
    #[error("Username must not be empty")]
    EmptyUsername,

    #[error("Row {0} does not exist")]
    RowOutOfRange(usize),

    #[error("A save is already in progress")]
    SaveInProgress,

    #[error("A deletion is already in progress")]
    DeleteInProgress,

    #[error("User id has to be set")]
    MissingUserId,

    /// The request could not be sent or the response could not be decoded.
    #[error("Network error: {0}")]
    Network(String),

    /// The username is already taken.
    #[error("User already exists")]
    Conflict,

    /// Any other non-success status.
    #[error("Server responded with {status}: {message}")]
    Server { status: u64, message: String },
}

impl From<ApiError> for RosterError {
    fn from(err: ApiError) -> Self {
        match err.status {
            NETWORK_ERROR_STATUS => RosterError::Network(err.message),
            409 => RosterError::Conflict,
            status => RosterError::Server {
                status,
                message: err.message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_api_errors_by_status() {
        assert_eq!(
            RosterError::from(ApiError::network("offline")),
            RosterError::Network("offline".to_string())
        );
        assert_eq!(
            RosterError::from(ApiError {
                status: 409,
                message: "taken".to_string()
            }),
            RosterError::Conflict
        );
        assert_eq!(
            RosterError::from(ApiError {
                status: 500,
                message: "boom".to_string()
            }),
            RosterError::Server {
                status: 500,
                message: "boom".to_string()
            }
        );
    }
}
