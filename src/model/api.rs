use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// JSON body of every non-success API response.
#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ErrorDto {
    pub error: String,
}

/// Turns `roster/`, `/roster` and `/roster/` into `/roster`; `/` and blank become empty.
///
/// Shared by the server configuration and the client URL builder so both agree on the
/// prefix regardless of how it was written.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
