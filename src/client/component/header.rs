use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaUser, Icon};

use crate::client::{constant::SITE_NAME, model::auth::AuthState, router::Route};

#[component]
pub fn Header() -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let username = auth.read().username().map(str::to_string);

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::UserSettings {},
                p {
                    class: "md:text-xl text-wrap",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if let Some(name) = username {
                div {
                    class: "flex gap-2 items-center opacity-80",
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaUser
                    }
                    p { "{name}" }
                }
            }
        }
    })
}
