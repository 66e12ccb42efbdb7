//! Characters page for a campaign: the list plus the two-step wizard.

use api::{Campaign, Character};
use dioxus::prelude::*;
use ui::{use_auth, use_session, CharacterList, CharacterModal, CharacterWizard};

use crate::views::Shell;
use crate::Route;

#[component]
pub fn CampaignCharacters(id: i64) -> Element {
    let session = use_session();
    let auth = use_auth();
    let nav = use_navigator();
    let mut campaign = use_signal(|| Option::<Campaign>::None);
    let mut characters = use_signal(Vec::<Character>::new);
    let mut reload = use_signal(|| 0u32);
    let mut wizard = use_context_provider(|| Signal::new(CharacterWizard::default()));

    let load_session = session.clone();
    let _ = use_resource(move || {
        let session = load_session.clone();
        let ready = auth();
        let _tick = reload();
        async move {
            if !ready.is_authenticated {
                return;
            }
            match session.fetch_campaign(id).await {
                Ok(found) => campaign.set(Some(found)),
                Err(err) => tracing::error!("failed to load campaign {id}: {err}"),
            }
            match session.list_characters(id).await {
                Ok(list) => characters.set(list),
                Err(err) => tracing::error!("failed to load characters: {err}"),
            }
        }
    });

    let delete_session = session.clone();
    let handle_delete = move |character_id: i64| {
        let session = delete_session.clone();
        spawn(async move {
            match session.delete_character(id, character_id).await {
                Ok(()) => reload.set(reload() + 1),
                Err(err) => tracing::error!("failed to delete character: {err}"),
            }
        });
    };

    let heading = campaign()
        .map(|campaign| campaign.name)
        .unwrap_or_else(|| "Campaign".to_string());

    rsx! {
        Shell {
            button {
                class: "link",
                onclick: move |_| {
                    nav.push(Route::CampaignDetail { id });
                },
                "← Back to campaign"
            }

            div {
                class: "page-header",
                h1 { "{heading} — Characters" }
                button {
                    class: "primary",
                    onclick: move |_| wizard.with_mut(|w| w.open_for_create(id)),
                    "New Character"
                }
            }

            CharacterList {
                characters: characters(),
                on_edit: move |character: Character| {
                    wizard.with_mut(|w| w.open_for_edit(id, &character));
                },
                on_delete: handle_delete,
            }

            CharacterModal { on_saved: move |_| reload.set(reload() + 1) }
        }
    }
}
