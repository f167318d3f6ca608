use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateUserParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_username;
mod get_all;
mod update;
