//! Drives `UserList` against the HTTP API from page event handlers.
//!
//! Each action runs the synchronous `begin_*` step immediately, awaits the request in a
//! task scoped to the page, then applies the response and forwards notifications to
//! the toaster. Page tasks are cancelled on unmount, so nothing runs against a dropped
//! page.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::HttpUserApi,
    component::Toaster,
    model::user_list::{UserApi, UserList},
};

fn flush(list: &mut Signal<UserList>, toaster: &mut Toaster) {
    let notifications = list.write().take_notifications();
    toaster.push_all(notifications);
}

pub async fn load_users(mut list: Signal<UserList>, mut toaster: Toaster) {
    if !list.write().begin_load() {
        return;
    }

    let result = HttpUserApi.list_users().await;
    if let Err(err) = list.write().finish_load(result) {
        tracing::error!("Failed to fetch users: {}", err);
    }
    flush(&mut list, &mut toaster);
}

pub fn add_user(mut list: Signal<UserList>, mut toaster: Toaster) {
    let payload = {
        let state = list.read();
        state.begin_add(&state.draft().username, &state.draft().groups)
    };
    let payload = match payload {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!("Refusing to create user: {}", err);
            return;
        }
    };

    spawn(async move {
        let result = HttpUserApi.create_user(&payload).await;
        let created = list.write().finish_create(result);
        let mounted = list.peek().is_mounted();

        match created {
            Ok(()) if mounted => {
                let users = HttpUserApi.list_users().await;
                if let Err(err) = list.write().finish_refresh(users) {
                    tracing::error!("Failed to refresh users after create: {}", err);
                }
            }
            Ok(()) => {}
            Err(err) => tracing::error!("Failed to create user {}: {}", payload.username, err),
        }
        flush(&mut list, &mut toaster);
    });
}

pub fn save_edit(mut list: Signal<UserList>, mut toaster: Toaster) {
    let request = match list.write().begin_save() {
        Ok(Some(request)) => request,
        Ok(None) => return,
        Err(err) => {
            tracing::warn!("Cannot save user: {}", err);
            return;
        }
    };

    spawn(async move {
        let result = HttpUserApi.update_user(&request.user).await;
        let user_id = request.user.id;
        if let Err(err) = list.write().finish_save(request, result) {
            tracing::error!("Failed to save user {}: {}", user_id, err);
        }
        flush(&mut list, &mut toaster);
    });
}

pub fn confirm_delete(mut list: Signal<UserList>, mut toaster: Toaster) {
    let begin = list.write().begin_delete();
    let id = match begin {
        Ok(id) => id,
        Err(err) => {
            tracing::error!("Cannot delete user: {}", err);
            flush(&mut list, &mut toaster);
            return;
        }
    };

    spawn(async move {
        let result = HttpUserApi.delete_user(id).await;
        if let Err(err) = list.write().finish_delete(id, result) {
            tracing::error!("Failed to delete user {}: {}", id, err);
        }
        flush(&mut list, &mut toaster);
    });
}
