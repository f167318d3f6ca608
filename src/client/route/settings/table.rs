use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCheck, FaPen, FaTrash, FaXmark},
    Icon,
};
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{GroupsInput, Toaster},
        model::{
            auth::AuthState,
            user_list::{can_delete, UserList},
        },
    },
    model::user::UserDto,
};

#[component]
pub fn UserTable(list: Signal<UserList>) -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let current_username = auth.read().username().map(str::to_string);

    let users = list.read().users().to_vec();
    let editing_row = list.read().editing_row();

    rsx! {
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Username" }
                        th { "Groups" }
                        th { class: "text-right", "Actions" }
                    }
                }
                tbody {
                    if users.is_empty() {
                        tr {
                            td {
                                colspan: "3",
                                class: "text-center opacity-70",
                                "No users found."
                            }
                        }
                    }
                    for (row, user) in users.into_iter().enumerate() {
                        if editing_row == Some(row) {
                            EditingRow { key: "{user.id}", list, user }
                        } else {
                            UserRow {
                                key: "{user.id}",
                                list,
                                row,
                                deletable: can_delete(&user, current_username.as_deref()),
                                user,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(mut list: Signal<UserList>, row: usize, user: UserDto, deletable: bool) -> Element {
    let saving = list.read().is_saving();
    let staged = user.clone();

    rsx! {
        tr {
            td { "{user.username}" }
            td {
                div {
                    class: "flex flex-wrap gap-1",
                    for group in user.groups().iter() {
                        span { class: "badge badge-success", "{group}" }
                    }
                }
            }
            td {
                div {
                    class: "flex gap-2 justify-end",
                    button {
                        class: "btn btn-sm btn-ghost",
                        title: "Edit",
                        disabled: saving,
                        onclick: move |_| {
                            if let Err(err) = list.write().begin_edit(row) {
                                tracing::warn!("Cannot edit row {}: {}", row, err);
                            }
                        },
                        Icon { width: 14, height: 14, icon: FaPen }
                    }
                    button {
                        class: "btn btn-sm btn-ghost text-error",
                        title: if deletable { "Delete" } else { "You cannot delete yourself" },
                        disabled: !deletable,
                        onclick: move |_| list.write().request_delete(staged.clone()),
                        Icon { width: 14, height: 14, icon: FaTrash }
                    }
                }
            }
        }
    }
}

#[component]
fn EditingRow(mut list: Signal<UserList>, user: UserDto) -> Element {
    let toaster = use_context::<Toaster>();
    let groups = list.read().edit_groups().to_vec();
    let saving = list.read().is_saving();

    rsx! {
        tr {
            td { "{user.username}" }
            td {
                GroupsInput {
                    groups,
                    disabled: saving,
                    on_change: move |groups| list.write().set_edit_groups(groups),
                }
            }
            td {
                div {
                    class: "flex gap-2 justify-end",
                    button {
                        class: "btn btn-sm btn-success",
                        title: "Save",
                        disabled: saving,
                        onclick: move |_| {
                            #[cfg(feature = "web")]
                            super::actions::save_edit(list, toaster);
                        },
                        if saving {
                            span { class: "loading loading-spinner loading-xs" }
                        } else {
                            Icon { width: 14, height: 14, icon: FaCheck }
                        }
                    }
                    button {
                        class: "btn btn-sm btn-ghost",
                        title: "Cancel",
                        disabled: saving,
                        onclick: move |_| list.write().cancel_edit(),
                        Icon { width: 14, height: 14, icon: FaXmark }
                    }
                }
            }
        }
    }
}
