//! Landing page after sign-in.

use dioxus::prelude::*;
use ui::{use_auth, use_session};

use crate::views::Shell;
use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let auth = use_auth();
    let nav = use_navigator();
    let mut campaign_count = use_signal(|| Option::<usize>::None);

    let count_session = session.clone();
    let _ = use_resource(move || {
        let session = count_session.clone();
        let ready = auth();
        async move {
            if !ready.is_authenticated {
                return;
            }
            match session.list_campaigns().await {
                Ok(campaigns) => campaign_count.set(Some(campaigns.len())),
                Err(err) => tracing::error!("failed to load campaigns: {err}"),
            }
        }
    });

    let greeting = auth()
        .user
        .map(|user| user.display_name())
        .unwrap_or_default();

    rsx! {
        Shell {
            h1 { "Welcome back, {greeting}" }
            p { class: "page-subtitle", "Manage your campaigns and lore" }

            div {
                class: "card",
                h3 { "Your Campaigns" }
                {match campaign_count() {
                    Some(1) => rsx! { p { "You are running 1 campaign." } },
                    Some(count) => rsx! { p { "You are running {count} campaigns." } },
                    None => rsx! { p { class: "muted", "Loading campaigns..." } },
                }}
                button {
                    class: "primary",
                    onclick: move |_| {
                        nav.push(Route::Campaigns {});
                    },
                    "Go to campaigns"
                }
            }
        }
    }
}
