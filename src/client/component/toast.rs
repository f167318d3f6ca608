use dioxus::prelude::*;

use crate::client::model::user_list::{Notification, NotificationKind};

#[derive(Clone, PartialEq)]
struct Toast {
    id: u64,
    notification: Notification,
}

/// Handle for raising toasts, provided as context by the app root.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    /// Shows a toast that disappears on its own after a few seconds.
    pub fn push(&mut self, notification: Notification) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.toasts.write().push(Toast { id, notification });

        #[cfg(feature = "web")]
        {
            use crate::client::constant::TOAST_DURATION_MS;

            let mut toaster = *self;
            // Outlives the page that raised it.
            dioxus::core::spawn_forever(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
                toaster.dismiss(id);
            });
        }
    }

    pub fn push_all(&mut self, notifications: Vec<Notification>) {
        for notification in notifications {
            self.push(notification);
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastHost() -> Element {
    let mut toaster = use_context::<Toaster>();
    let toasts = toaster.toasts.read().clone();

    rsx!(
        div {
            class: "toast toast-end z-30",
            for toast in toasts {
                {
                    let id = toast.id;
                    let class = match toast.notification.kind {
                        NotificationKind::Success => "alert alert-success",
                        NotificationKind::Error => "alert alert-error",
                    };
                    rsx! {
                        div {
                            key: "{id}",
                            class: "{class} cursor-pointer",
                            onclick: move |_| toaster.dismiss(id),
                            span { "{toast.notification.message}" }
                        }
                    }
                }
            }
        }
    )
}
