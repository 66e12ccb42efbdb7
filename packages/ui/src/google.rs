//! Google Identity Services sign-in button.

use dioxus::prelude::*;

const GSI_SRC: &str = "https://accounts.google.com/gsi/client";
/// Name GIS resolves against `window` when the button completes.
const CALLBACK_NAME: &str = "onGoogleCredential";

/// Renders the declarative GIS button and forwards the ID credential it
/// produces to `on_credential`. The exchange with the backend is the
/// caller's job.
#[component]
pub fn GoogleSignIn(on_credential: EventHandler<String>) -> Element {
    // The callback has to exist on `window` before the GIS script runs.
    use_effect(move || install_callback(on_credential));

    rsx! {
        div {
            id: "g_id_onload",
            "data-client_id": api::google_client_id(),
            "data-callback": CALLBACK_NAME,
            "data-auto_prompt": "false",
        }
        div {
            class: "g_id_signin",
            "data-type": "standard",
            "data-theme": "filled_black",
            "data-size": "large",
            "data-shape": "pill",
            "data-text": "continue_with",
        }
        document::Script { src: GSI_SRC }
    }
}

#[cfg(target_arch = "wasm32")]
fn install_callback(on_credential: EventHandler<String>) {
    use wasm_bindgen::prelude::*;

    let handler = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
        let credential = js_sys::Reflect::get(&response, &JsValue::from_str("credential"))
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default();
        on_credential.call(credential);
    });

    if let Some(window) = web_sys::window() {
        if js_sys::Reflect::set(&window, &JsValue::from_str(CALLBACK_NAME), handler.as_ref())
            .is_err()
        {
            tracing::error!("failed to install Google sign-in callback");
        }
    }

    // The callback must outlive this component.
    handler.forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn install_callback(_on_credential: EventHandler<String>) {}
