use dioxus::prelude::*;

use super::Modal;

/// Yes/no dialog for destructive actions.
///
/// While `is_processing` is set both buttons are disabled and the dialog cannot be
/// dismissed, so the pending request always resolves against an open dialog.
#[component]
pub fn ConfirmationModal(
    show: bool,
    title: String,
    message: Element,
    confirm_text: String,
    #[props(default = "btn-primary".to_string())] confirm_class: String,
    is_processing: bool,
    #[props(default = "Working...".to_string())] processing_text: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let label = if is_processing {
        processing_text
    } else {
        confirm_text
    };

    rsx!(
        Modal {
            show,
            title,
            prevent_close: is_processing,
            on_close: on_cancel,
            {message}
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn btn-ghost",
                    disabled: is_processing,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn {confirm_class}",
                    disabled: is_processing,
                    onclick: move |_| on_confirm.call(()),
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                    }
                    "{label}"
                }
            }
        }
    )
}
