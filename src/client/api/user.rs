use crate::{
    client::{
        api::helper::{
            api_url, delete, get, parse_empty_response, parse_response, post, put, send_request,
            serialize_json,
        },
        model::{error::ApiError, user_list::UserApi},
    },
    model::user::{CreateUserDto, UserDto},
};

pub async fn get_users() -> Result<Vec<UserDto>, ApiError> {
    let request = get(&api_url("/api/users"));
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_user(payload: &CreateUserDto) -> Result<(), ApiError> {
    let body = serialize_json(payload)?;
    let request = post(&api_url("/api/users")).body(body);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}

pub async fn update_user(user: &UserDto) -> Result<UserDto, ApiError> {
    let url = api_url(&format!("/api/users/{}", user.id));
    let body = serialize_json(user)?;
    let request = put(&url).body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_user(id: i32) -> Result<(), ApiError> {
    let url = api_url(&format!("/api/users/{}", id));
    let request = delete(&url);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}

/// Returns the account the request is made as, if the proxy identified one.
pub async fn get_current_user() -> Result<Option<UserDto>, ApiError> {
    let request = get(&api_url("/api/user"));
    let response = send_request(request).await?;
    parse_response(response).await
}

/// Browser implementation of [`UserApi`] backed by the functions above.
#[derive(Clone, Copy, Default)]
pub struct HttpUserApi;

impl UserApi for HttpUserApi {
    async fn list_users(&self) -> Result<Vec<UserDto>, ApiError> {
        get_users().await
    }

    async fn create_user(&self, payload: &CreateUserDto) -> Result<(), ApiError> {
        create_user(payload).await
    }

    async fn update_user(&self, user: &UserDto) -> Result<UserDto, ApiError> {
        update_user(user).await
    }

    async fn delete_user(&self, id: i32) -> Result<(), ApiError> {
        delete_user(id).await
    }
}
