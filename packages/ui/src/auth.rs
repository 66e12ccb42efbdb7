//! Authentication context and hooks for the UI.

use std::rc::Rc;

use api::{AppSession, SessionState};
use dioxus::prelude::*;

/// Shared handle to the process-wide session manager.
pub fn use_session() -> Rc<AppSession> {
    use_context::<Rc<AppSession>>()
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the session and its reactive state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_hook(|| {
        let session = Rc::new(api::make_session());
        session.on_session_expired(redirect_to_login);
        session
    });
    let mut auth_state = use_signal(SessionState::default);

    // Restore the persisted session on mount.
    let restore_session = session.clone();
    let _ = use_resource(move || {
        let session = restore_session.clone();
        async move {
            let restored = session.restore().await;
            // Only write the signal on an actual change so duplicate
            // restores don't re-render the whole tree.
            if auth_state() != restored {
                auth_state.set(restored);
            }
        }
    });

    use_context_provider(|| session);
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();
    let mut auth_state = use_auth();

    let onclick = move |_| {
        session.logout();
        auth_state.set(session.state());
        redirect_to_login();
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// Hard navigation to the login entry point, used on logout and when a
/// mid-session refresh fails for good.
fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("session expired; login required");
    }
}
