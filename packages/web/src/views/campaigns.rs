//! Campaign list page with the create/edit dialog.

use api::Campaign;
use dioxus::prelude::*;
use ui::{use_auth, use_session, CampaignList, CampaignModal, CampaignModalState};

use crate::views::Shell;
use crate::Route;

#[component]
pub fn Campaigns() -> Element {
    let session = use_session();
    let auth = use_auth();
    let nav = use_navigator();
    let mut campaigns = use_signal(Vec::<Campaign>::new);
    let mut reload = use_signal(|| 0u32);
    let mut modal = use_context_provider(|| Signal::new(CampaignModalState::default()));

    let list_session = session.clone();
    let _ = use_resource(move || {
        let session = list_session.clone();
        let ready = auth();
        let _tick = reload();
        async move {
            if !ready.is_authenticated {
                return;
            }
            match session.list_campaigns().await {
                Ok(list) => campaigns.set(list),
                Err(err) => tracing::error!("failed to load campaigns: {err}"),
            }
        }
    });

    let delete_session = session.clone();
    let handle_delete = move |id: i64| {
        let session = delete_session.clone();
        spawn(async move {
            match session.delete_campaign(id).await {
                Ok(()) => reload.set(reload() + 1),
                Err(err) => tracing::error!("failed to delete campaign: {err}"),
            }
        });
    };

    rsx! {
        Shell {
            div {
                class: "page-header",
                h1 { "Campaigns" }
                button {
                    class: "primary",
                    onclick: move |_| modal.with_mut(|m| m.open_new()),
                    "New Campaign"
                }
            }

            CampaignList {
                campaigns: campaigns(),
                on_open: move |id| {
                    nav.push(Route::CampaignDetail { id });
                },
                on_edit: move |campaign| modal.with_mut(|m| m.open_edit(campaign)),
                on_delete: handle_delete,
            }

            CampaignModal { on_saved: move |_| reload.set(reload() + 1) }
        }
    }
}
