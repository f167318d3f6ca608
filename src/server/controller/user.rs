use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::identity::RemoteUser,
        model::user::{CreateUserParam, UpdateUserParam},
        service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users ordered by id", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let dto: Vec<UserDto> = users.into_iter().map(|user| user.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Username is empty", body = ErrorDto),
        (status = 409, description = "Username already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .create(CreateUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Username is empty", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Username taken by another user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .update(UpdateUserParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted user"),
        (status = 400, description = "Attempted to delete the requesting account", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    remote_user: RemoteUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db)
        .delete(id, remote_user.username())
        .await?;

    Ok(StatusCode::OK)
}

/// Returns the account named by the identity header, or `null` when the header is
/// missing or names an unknown user.
#[utoipa::path(
    get,
    path = "/api/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Requesting user, null when anonymous", body = Option<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    remote_user: RemoteUser,
) -> Result<impl IntoResponse, AppError> {
    let user = match remote_user.username() {
        Some(username) => UserService::new(&state.db).get_by_username(username).await?,
        None => None,
    };

    Ok((StatusCode::OK, Json(user.map(|user| user.into_dto()))))
}
