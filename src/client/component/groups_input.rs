use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaXmark, Icon};

/// Tag editor for a user's groups.
///
/// Enter or the add button appends the typed group; duplicates and blank input are
/// ignored here so the list stays tidy for display.
#[component]
pub fn GroupsInput(
    groups: Vec<String>,
    on_change: EventHandler<Vec<String>>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let mut value = use_signal(String::new);

    let mut add_group = {
        let groups = groups.clone();
        move || {
            let group = value.peek().trim().to_string();
            if group.is_empty() || groups.contains(&group) {
                return;
            }
            let mut next = groups.clone();
            next.push(group);
            on_change.call(next);
            value.set(String::new());
        }
    };
    let mut add_on_enter = add_group.clone();

    rsx! {
        div {
            class: "flex flex-col gap-2 w-full",
            div {
                class: "join w-full",
                input {
                    r#type: "text",
                    class: "input input-sm input-bordered join-item w-full",
                    placeholder: "Add group",
                    value: "{value}",
                    disabled,
                    oninput: move |evt| value.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            evt.prevent_default();
                            add_on_enter();
                        }
                    },
                }
                button {
                    r#type: "button",
                    class: "btn btn-sm join-item",
                    disabled,
                    onclick: move |_| add_group(),
                    "Add"
                }
            }
            div {
                class: "flex flex-wrap gap-1",
                for (i, group) in groups.iter().enumerate() {
                    {
                        let groups = groups.clone();
                        rsx! {
                            span {
                                key: "{group}",
                                class: "badge badge-success gap-1",
                                "{group}"
                                if !disabled {
                                    button {
                                        r#type: "button",
                                        class: "cursor-pointer",
                                        onclick: move |_| {
                                            let mut next = groups.clone();
                                            next.remove(i);
                                            on_change.call(next);
                                        },
                                        Icon { width: 10, height: 10, icon: FaXmark }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
