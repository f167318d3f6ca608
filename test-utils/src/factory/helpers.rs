//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// username to prevent collisions with the unique index.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds the JSON document stored in the `data` column of a user.
///
/// # Arguments
/// - `groups` - Group tags of the user
///
/// # Returns
/// - `serde_json::Value` - `{"groups": [...]}`
pub fn user_data<I, S>(groups: I) -> serde_json::Value
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let groups: Vec<String> = groups.into_iter().map(Into::into).collect();
    serde_json::json!({ "groups": groups })
}
