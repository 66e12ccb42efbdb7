use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};

/// Top navigation bar: brand, the caller's links, signed-in user, logout.
#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();

    rsx! {
        div {
            class: "navbar",
            div { class: "navbar-brand", "Lorekeeper" }
            div { class: "navbar-links", {children} }
            div {
                class: "navbar-user",
                {auth().user.map(|user| {
                    let name = user.display_name();
                    rsx! {
                        span { class: "navbar-username", "{name}" }
                    }
                })}
                LogoutButton { class: "navbar-logout" }
            }
        }
    }
}
