use dioxus::prelude::*;

use crate::client::{
    component::Toaster, constant::SITE_NAME, model::auth::AuthState, router::Route,
};

#[cfg(feature = "web")]
use crate::client::api::user::get_current_user;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let mut auth = use_context_provider(|| Signal::new(AuthState::default()));
    use_context_provider(Toaster::new);

    // Resolve who is signed in once; the header and the delete guard read it.
    #[cfg(feature = "web")]
    use_future(move || async move {
        use dioxus_logger::tracing;

        match get_current_user().await {
            Ok(user) => auth.set(AuthState::from(user)),
            Err(err) => {
                tracing::error!("Failed to resolve current user: {}", err);
                auth.set(AuthState::Error(err));
            }
        }
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "User roster administration"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
