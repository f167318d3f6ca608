use dioxus::prelude::*;

use crate::client::{
    component::{GroupsInput, Toaster},
    model::user_list::UserList,
};

#[component]
pub fn AddUserForm(mut list: Signal<UserList>) -> Element {
    let toaster = use_context::<Toaster>();
    let draft = list.read().draft().clone();
    let can_submit = !draft.username.trim().is_empty();

    rsx! {
        form {
            class: "card bg-base-200 p-4 flex flex-col gap-3",
            onsubmit: move |evt| {
                evt.prevent_default();
                #[cfg(feature = "web")]
                super::actions::add_user(list, toaster);
            },
            h2 {
                class: "text-lg font-semibold",
                "Add User"
            }
            div {
                class: "flex flex-col md:flex-row gap-3 md:items-start",
                label {
                    class: "form-control w-full md:w-1/3",
                    span { class: "label-text mb-1", "Username" }
                    input {
                        r#type: "text",
                        class: "input input-sm input-bordered w-full",
                        placeholder: "username",
                        value: "{draft.username}",
                        oninput: move |evt| list.write().draft_mut().username = evt.value(),
                    }
                }
                div {
                    class: "form-control w-full",
                    span { class: "label-text mb-1", "Groups" }
                    GroupsInput {
                        groups: draft.groups.clone(),
                        on_change: move |groups| list.write().draft_mut().groups = groups,
                    }
                }
            }
            div {
                class: "flex justify-end",
                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-sm",
                    disabled: !can_submit,
                    "Add"
                }
            }
        }
    }
}
