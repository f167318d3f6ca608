use crate::model::api::normalize_base_path;

pub const SITE_NAME: &str = "Roster";

/// `BASE_PATH` as given when the client was built. The server must run with the same
/// value, since the client cannot discover the prefix at run time.
const BUILD_BASE_PATH: &str = match option_env!("BASE_PATH") {
    Some(path) => path,
    None => "",
};

/// Path prefix the application is served under, normalized like the server's.
pub fn base_path() -> String {
    normalize_base_path(BUILD_BASE_PATH)
}

/// How long a toast stays visible.
pub const TOAST_DURATION_MS: u32 = 4_000;
