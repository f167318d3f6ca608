use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{NotFound, UserSettings};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    UserSettings {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
