#[cfg(feature = "web")]
mod actions;
mod add_form;
mod table;

use dioxus::prelude::*;

use crate::client::{
    component::{page::LoadingPage, ConfirmationModal, Page, Toaster},
    constant::SITE_NAME,
    model::user_list::{LoadState, UserList},
};

use add_form::AddUserForm;
use table::UserTable;

/// User management page: roster table, add form and delete confirmation.
#[component]
pub fn UserSettings() -> Element {
    let mut list = use_signal(UserList::new);
    let toaster = use_context::<Toaster>();

    #[cfg(feature = "web")]
    use_future(move || actions::load_users(list, toaster));

    use_drop(move || {
        // The signal may already be gone when the whole tree is torn down.
        if let Ok(mut state) = list.try_write() {
            state.unmount();
        }
    });

    let loading = matches!(
        list.read().load_state(),
        LoadState::NotFetched | LoadState::Loading
    );
    let pending = list.read().pending_delete().cloned();
    let dialog_open = list.read().is_delete_dialog_open();
    let deleting = list.read().is_deleting();

    if loading {
        return rsx! {
            Title { "Users | {SITE_NAME}" }
            LoadingPage {}
        };
    }

    rsx! {
        Title { "Users | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-5xl flex flex-col gap-6",
                h1 {
                    class: "text-lg sm:text-2xl",
                    "Users"
                }
                AddUserForm { list }
                UserTable { list }
            }
        }

        ConfirmationModal {
            show: dialog_open,
            title: "Delete User".to_string(),
            message: rsx!(
                p {
                    class: "py-4",
                    "Are you sure you want to delete "
                    span {
                        class: "font-bold",
                        {pending.as_ref().map(|user| user.username.clone()).unwrap_or_default()}
                    }
                    "? This action cannot be undone."
                }
            ),
            confirm_text: "Delete".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: deleting,
            processing_text: "Deleting...".to_string(),
            on_confirm: move |_| {
                #[cfg(feature = "web")]
                actions::confirm_delete(list, toaster);
            },
            on_cancel: move |_| {
                list.write().close_delete();
            },
        }
    }
}
