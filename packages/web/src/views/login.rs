//! Login page with the Google sign-in button.

use dioxus::prelude::*;
use ui::{use_auth, use_session, GoogleSignIn};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut error = use_signal(|| Option::<String>::None);

    // Already signed-in visitors have no business here.
    let state = auth();
    if !state.loading && state.is_authenticated {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let login_session = session.clone();
    let handle_credential = move |credential: String| {
        let session = login_session.clone();
        spawn(async move {
            match session.login(&credential).await {
                Ok(_) => {
                    auth.set(session.state());
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    // Stay on the page; the user only gets the message.
                    tracing::error!("login failed: {err}");
                    error.set(Some(err.user_message()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-page",
            h1 { class: "login-title", "Lorekeeper" }
            p { class: "login-tagline", "Your gateway to epic adventures" }

            {error().map(|message| rsx! {
                p { class: "login-error", "{message}" }
            })}

            div {
                class: "login-button",
                GoogleSignIn { on_credential: handle_credential }
            }
        }
    }
}
